use async_trait::async_trait;

use super::validation::{self, MAX_ABOUT_LEN};
use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::ProfileChanges,
};
use crate::media::application::domain::entities::ImageUpload;

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

/// Raw, unvalidated profile fields. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<ImageUpload>,
    pub cover_image: Option<ImageUpload>,
    pub remove_cover_image: bool,
}

#[derive(Debug, Default)]
pub struct ProfileImages {
    pub profile: Option<ImageUpload>,
    pub cover: Option<ImageUpload>,
    pub remove_cover: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    changes: ProfileChanges,
    profile_image: Option<ImageUpload>,
    cover_image: Option<ImageUpload>,
    remove_cover_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Age must be between 1 and 150")]
    InvalidAge,

    #[error("Gender must be male, female or other")]
    InvalidGender,

    #[error("About must not exceed {0} characters")]
    AboutTooLong(usize),
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<Self, UpdateProfileCommandError> {
        let name = match input.name {
            Some(name) => match name.trim() {
                "" => return Err(UpdateProfileCommandError::EmptyName),
                trimmed => Some(trimmed.to_string()),
            },
            None => None,
        };

        if let Some(age) = input.age {
            if !validation::is_valid_age(age) {
                return Err(UpdateProfileCommandError::InvalidAge);
            }
        }

        let gender = validation::parse_optional_gender(input.gender)
            .map_err(|_| UpdateProfileCommandError::InvalidGender)?;

        let about = input.about.map(|a| a.trim().to_string());
        if about
            .as_deref()
            .is_some_and(|a| a.chars().count() > MAX_ABOUT_LEN)
        {
            return Err(UpdateProfileCommandError::AboutTooLong(MAX_ABOUT_LEN));
        }

        let changes = ProfileChanges {
            name,
            age: input.age,
            gender,
            about,
            location: input.location.map(|l| l.trim().to_string()),
            website: input.website.map(|w| w.trim().to_string()),
            profile_image_url: None,
            cover_image_url: None,
        };

        Ok(Self {
            user_id,
            changes,
            profile_image: input.profile_image,
            cover_image: input.cover_image,
            remove_cover_image: input.remove_cover_image,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn into_parts(self) -> (UserId, ProfileChanges, ProfileImages) {
        (
            self.user_id,
            self.changes,
            ProfileImages {
                profile: self.profile_image,
                cover: self.cover_image,
                remove_cover: self.remove_cover_image,
            },
        )
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<UserProfile, UpdateProfileError>;
}
