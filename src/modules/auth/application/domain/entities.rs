use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Full user record, secrets included. Never serialized; use `UserProfile` for output.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_email_verified: bool,
    pub email_otp: Option<String>,
    pub email_otp_expires_at: Option<DateTime<Utc>>,
    pub password_reset_token_hash: Option<String>,
    pub password_reset_expires_at: Option<DateTime<Utc>>,
    pub email_notifications: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Username is the local part of the email address.
    pub fn username_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or_default().to_string()
    }

    /// Whether engagement emails (likes, comments) may be sent to this user.
    pub fn accepts_notifications(&self) -> bool {
        self.email_notifications && self.is_email_verified
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_email_verified: bool,
    pub email_notifications: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            age: user.age,
            gender: user.gender,
            about: user.about.clone(),
            location: user.location.clone(),
            website: user.website.clone(),
            profile_image_url: user.profile_image_url.clone(),
            cover_image_url: user.cover_image_url.clone(),
            is_email_verified: user.is_email_verified,
            email_notifications: user.email_notifications,
            joined_at: user.created_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile::from(&user)
    }
}

#[cfg(test)]
pub mod test_fixtures {
    use super::*;

    pub fn user(email: &str, verified: bool) -> User {
        let now = Utc::now();
        User {
            id: UserId::from(Uuid::new_v4()),
            name: "Ann".to_string(),
            username: User::username_from_email(email),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
            age: None,
            gender: None,
            about: None,
            location: None,
            website: None,
            profile_image_url: None,
            cover_image_url: None,
            is_email_verified: verified,
            email_otp: None,
            email_otp_expires_at: None,
            password_reset_token_hash: None,
            password_reset_expires_at: None,
            email_notifications: true,
            created_at: now,
            updated_at: now,
        }
    }
}
