//! In-memory ports shared by the auth service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::{
    entities::{User, UserId},
    otp::OneTimePassword,
};
use crate::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, ProfileChanges, TokenClaims, TokenError, TokenProvider,
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::{
    EmailRecipient, UserEmailNotificationError, UserEmailNotifier,
};

// ──────────────────────────────────────────────────────────
// User store (repository + query over one map)
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    fail_with: Option<String>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        let store = Self::default();
        for user in users {
            store.users.lock().unwrap().insert(user.id, user);
        }
        store
    }

    pub fn broken(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    fn check(&self) -> Result<(), String> {
        match &self.fail_with {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }

    fn modify<F>(&self, id: UserId, f: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(UserRepositoryError::UserNotFound)?;
        f(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        if self.by_email(&new_user.email).is_some() {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            name: new_user.name,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            age: new_user.age,
            gender: new_user.gender,
            about: None,
            location: None,
            website: None,
            profile_image_url: new_user.profile_image_url,
            cover_image_url: None,
            is_email_verified: false,
            email_otp: Some(new_user.otp.code().to_string()),
            email_otp_expires_at: Some(new_user.otp.expires_at()),
            password_reset_token_hash: None,
            password_reset_expires_at: None,
            email_notifications: true,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn store_email_otp(
        &self,
        user_id: UserId,
        otp: &OneTimePassword,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.email_otp = Some(otp.code().to_string());
            u.email_otp_expires_at = Some(otp.expires_at());
        })
        .map(|_| ())
    }

    async fn mark_email_verified(&self, user_id: UserId) -> Result<User, UserRepositoryError> {
        self.modify(user_id, |u| {
            u.is_email_verified = true;
            u.email_otp = None;
            u.email_otp_expires_at = None;
        })
    }

    async fn store_password_reset(
        &self,
        user_id: UserId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.password_reset_token_hash = Some(token_hash.to_string());
            u.password_reset_expires_at = Some(expires_at);
        })
        .map(|_| ())
    }

    async fn reset_password(
        &self,
        user_id: UserId,
        new_password_hash: &str,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.password_hash = new_password_hash.to_string();
            u.password_reset_token_hash = None;
            u.password_reset_expires_at = None;
        })
        .map(|_| ())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, |u| {
            if let Some(name) = changes.name {
                u.name = name;
            }
            if changes.age.is_some() {
                u.age = changes.age;
            }
            if changes.gender.is_some() {
                u.gender = changes.gender;
            }
            if changes.about.is_some() {
                u.about = changes.about;
            }
            if changes.location.is_some() {
                u.location = changes.location;
            }
            if changes.website.is_some() {
                u.website = changes.website;
            }
            if changes.profile_image_url.is_some() {
                u.profile_image_url = changes.profile_image_url;
            }
            if let Some(cover) = changes.cover_image_url {
                u.cover_image_url = cover;
            }
        })
    }

    async fn set_email_notifications(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<User, UserRepositoryError> {
        self.modify(user_id, |u| u.email_notifications = enabled)
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.by_email(email))
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.password_reset_token_hash.as_deref() == Some(token_hash))
            .cloned())
    }
}

// ──────────────────────────────────────────────────────────
// Hasher
// ──────────────────────────────────────────────────────────

/// Reversible stand-in for bcrypt: `hashed:<password>`.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

// ──────────────────────────────────────────────────────────
// Token provider
// ──────────────────────────────────────────────────────────

pub struct FixedTokenProvider;

impl TokenProvider for FixedTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, _email: &str) -> Result<String, TokenError> {
        Ok(format!("token-for-{}", user_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        unimplemented!("Not used in service tests")
    }

    fn access_token_ttl_seconds(&self) -> i64 {
        86_400
    }
}

// ──────────────────────────────────────────────────────────
// Email notifier
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    Otp { to: String, otp: String },
    Welcome { to: String },
    PasswordReset { to: String, token: String },
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, notification: SentNotification) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp down".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_otp_email(
        &self,
        recipient: &EmailRecipient,
        otp: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentNotification::Otp {
            to: recipient.email.clone(),
            otp: otp.to_string(),
        })
    }

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentNotification::Welcome {
            to: recipient.email.clone(),
        })
    }

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        reset_token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentNotification::PasswordReset {
            to: recipient.email.clone(),
            token: reset_token.to_string(),
        })
    }

    async fn send_like_notification(
        &self,
        _recipient: &EmailRecipient,
        _liker_name: &str,
        _post_title: &str,
        _post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError> {
        unimplemented!("Not used in auth tests")
    }

    async fn send_comment_notification(
        &self,
        _recipient: &EmailRecipient,
        _commenter_name: &str,
        _post_title: &str,
        _comment: &str,
        _post_id: Uuid,
    ) -> Result<(), UserEmailNotificationError> {
        unimplemented!("Not used in auth tests")
    }
}
