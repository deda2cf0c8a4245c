use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::{
    entities::{User, UserId},
    otp::OneTimePassword,
};
use crate::auth::application::ports::outgoing::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_update_error(e: DbErr) -> UserRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => UserRepositoryError::UserNotFound,
            other => UserRepositoryError::DatabaseError(other.to_string()),
        }
    }

    /// Partial update by primary key; only the columns `apply` sets are written.
    async fn update_columns<F>(&self, user_id: UserId, apply: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut UserActiveModel) + Send,
    {
        let mut active = UserActiveModel {
            id: Set(user_id.into()),
            ..Default::default()
        };
        apply(&mut active);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_update_error)?;

        Ok(updated.to_domain())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            age: Set(user.age),
            gender: Set(user.gender.map(|g| g.as_str().to_string())),
            about: Set(None),
            location: Set(None),
            website: Set(None),
            profile_image_url: Set(user.profile_image_url),
            cover_image_url: Set(None),
            is_email_verified: Set(false),
            email_otp: Set(Some(user.otp.code().to_string())),
            email_otp_expires_at: Set(Some(user.otp.expires_at().into())),
            password_reset_token_hash: Set(None),
            password_reset_expires_at: Set(None),
            email_notifications: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_domain())
    }

    async fn store_email_otp(
        &self,
        user_id: UserId,
        otp: &OneTimePassword,
    ) -> Result<(), UserRepositoryError> {
        let code = otp.code().to_string();
        let expires_at = otp.expires_at();

        self.update_columns(user_id, move |active| {
            active.email_otp = Set(Some(code));
            active.email_otp_expires_at = Set(Some(expires_at.into()));
        })
        .await
        .map(|_| ())
    }

    async fn mark_email_verified(&self, user_id: UserId) -> Result<User, UserRepositoryError> {
        self.update_columns(user_id, |active| {
            active.is_email_verified = Set(true);
            active.email_otp = Set(None);
            active.email_otp_expires_at = Set(None);
        })
        .await
    }

    async fn store_password_reset(
        &self,
        user_id: UserId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let token_hash = token_hash.to_string();

        self.update_columns(user_id, move |active| {
            active.password_reset_token_hash = Set(Some(token_hash));
            active.password_reset_expires_at = Set(Some(expires_at.into()));
        })
        .await
        .map(|_| ())
    }

    async fn reset_password(
        &self,
        user_id: UserId,
        new_password_hash: &str,
    ) -> Result<(), UserRepositoryError> {
        let new_password_hash = new_password_hash.to_string();

        self.update_columns(user_id, move |active| {
            active.password_hash = Set(new_password_hash);
            active.password_reset_token_hash = Set(None);
            active.password_reset_expires_at = Set(None);
        })
        .await
        .map(|_| ())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        self.update_columns(user_id, move |active| {
            if let Some(name) = changes.name {
                active.name = Set(name);
            }
            if let Some(age) = changes.age {
                active.age = Set(Some(age));
            }
            if let Some(gender) = changes.gender {
                active.gender = Set(Some(gender.as_str().to_string()));
            }
            if let Some(about) = changes.about {
                active.about = Set(Some(about));
            }
            if let Some(location) = changes.location {
                active.location = Set(Some(location));
            }
            if let Some(website) = changes.website {
                active.website = Set(Some(website));
            }
            if let Some(url) = changes.profile_image_url {
                active.profile_image_url = Set(Some(url));
            }
            if let Some(cover) = changes.cover_image_url {
                active.cover_image_url = Set(cover);
            }
        })
        .await
    }

    async fn set_email_notifications(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<User, UserRepositoryError> {
        self.update_columns(user_id, move |active| {
            active.email_notifications = Set(enabled);
        })
        .await
    }
}
