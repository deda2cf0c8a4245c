use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, User, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    pub age: Option<i32>,

    pub gender: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,

    pub location: Option<String>,

    pub website: Option<String>,

    pub profile_image_url: Option<String>,

    pub cover_image_url: Option<String>,

    pub is_email_verified: bool,

    pub email_otp: Option<String>,

    pub email_otp_expires_at: Option<DateTimeWithTimeZone>,

    pub password_reset_token_hash: Option<String>,

    pub password_reset_expires_at: Option<DateTimeWithTimeZone>,

    pub email_notifications: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> User {
        User {
            id: UserId::from(self.id),
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            age: self.age,
            gender: self.gender.as_deref().and_then(Gender::parse),
            about: self.about.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            profile_image_url: self.profile_image_url.clone(),
            cover_image_url: self.cover_image_url.clone(),
            is_email_verified: self.is_email_verified,
            email_otp: self.email_otp.clone(),
            email_otp_expires_at: self.email_otp_expires_at.map(Into::into),
            password_reset_token_hash: self.password_reset_token_hash.clone(),
            password_reset_expires_at: self.password_reset_expires_at.map(Into::into),
            email_notifications: self.email_notifications,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
