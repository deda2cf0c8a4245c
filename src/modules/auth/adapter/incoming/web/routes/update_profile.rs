use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateNotificationSettingsError, UpdateProfileCommand, UpdateProfileCommandError,
    UpdateProfileError, UpdateProfileInput,
};
use crate::media::adapter::incoming::web::{map_image_error, ImagePayload};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

/// Every field is optional; omitted fields keep their current value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    /// male, female or other
    pub gender: Option<String>,
    /// Up to 500 characters
    pub about: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<ImagePayload>,
    pub cover_image: Option<ImagePayload>,
    /// Clears the cover image when no new one is sent
    pub remove_cover_image: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotificationSettingsRequest {
    pub email_notifications: bool,
}

#[utoipa::path(
    put,
    path = "/user/profile",
    tag = "users",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Invalid field or image"),
        (status = 404, description = "User no longer exists")
    )
)]
#[put("/user/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let profile_image = match ImagePayload::decode_optional(req.profile_image, &data.upload_policy)
    {
        Ok(image) => image,
        Err(e) => return map_image_error(e),
    };
    let cover_image = match ImagePayload::decode_optional(req.cover_image, &data.upload_policy) {
        Ok(image) => image,
        Err(e) => return map_image_error(e),
    };

    let input = UpdateProfileInput {
        name: req.name,
        age: req.age,
        gender: req.gender,
        about: req.about,
        location: req.location,
        website: req.website,
        profile_image,
        cover_image,
        remove_cover_image: req.remove_cover_image,
    };

    let command = match UpdateProfileCommand::new(user.id(), input) {
        Ok(cmd) => cmd,
        Err(e) => {
            let code = match e {
                UpdateProfileCommandError::EmptyName => "INVALID_NAME",
                UpdateProfileCommandError::InvalidAge => "INVALID_AGE",
                UpdateProfileCommandError::InvalidGender => "INVALID_GENDER",
                UpdateProfileCommandError::AboutTooLong(_) => "ABOUT_TOO_LONG",
            };
            return ApiResponse::bad_request(code, &e.to_string());
        }
    };

    match data.auth.update_profile.execute(command).await {
        Ok(profile) => ApiResponse::success_with_message("Profile updated successfully", profile),

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    put,
    path = "/user/notifications",
    tag = "users",
    request_body = NotificationSettingsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 404, description = "User no longer exists")
    )
)]
#[put("/user/notifications")]
pub async fn update_notifications_handler(
    user: AuthenticatedUser,
    req: web::Json<NotificationSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let enabled = req.into_inner().email_notifications;

    match data.auth.update_notifications.execute(user.id(), enabled).await {
        Ok(profile) => {
            let message = if enabled {
                "Email notifications enabled"
            } else {
                "Email notifications disabled"
            };
            ApiResponse::success_with_message(message, profile)
        }

        Err(UpdateNotificationSettingsError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateNotificationSettingsError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update notification settings");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::{UserId, UserProfile};
    use crate::auth::application::ports::incoming::use_cases::{
        UpdateNotificationSettingsUseCase, UpdateProfileUseCase,
    };
    use crate::auth::application::ports::outgoing::ProfileChanges;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::user_profile;

    #[derive(Clone, Default)]
    struct MockUpdateProfile {
        seen: Arc<Mutex<Option<ProfileChanges>>>,
    }

    #[async_trait]
    impl UpdateProfileUseCase for MockUpdateProfile {
        async fn execute(
            &self,
            command: UpdateProfileCommand,
        ) -> Result<UserProfile, UpdateProfileError> {
            let (user_id, changes, _) = command.into_parts();
            let mut profile = user_profile(user_id.value());
            if let Some(about) = &changes.about {
                profile.about = Some(about.clone());
            }
            *self.seen.lock().unwrap() = Some(changes);
            Ok(profile)
        }
    }

    #[derive(Clone)]
    struct MockNotifications;

    #[async_trait]
    impl UpdateNotificationSettingsUseCase for MockNotifications {
        async fn execute(
            &self,
            user_id: UserId,
            email_notifications: bool,
        ) -> Result<UserProfile, UpdateNotificationSettingsError> {
            let mut profile = user_profile(user_id.value());
            profile.email_notifications = email_notifications;
            Ok(profile)
        }
    }

    async fn put(builder: TestAppStateBuilder, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(update_profile_handler)
                .service(update_notifications_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(uri)
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_update_profile_only_sends_supplied_fields() {
        let mock = MockUpdateProfile::default();
        let seen = mock.seen.clone();
        let builder = TestAppStateBuilder::default().with_update_profile(mock);

        let (status, body) = put(builder, "/user/profile", json!({ "about": " Writer " })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["about"], "Writer");

        let changes = seen.lock().unwrap().clone().unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.about.as_deref(), Some("Writer"));
    }

    #[actix_web::test]
    async fn test_update_profile_about_too_long() {
        let builder =
            TestAppStateBuilder::default().with_update_profile(MockUpdateProfile::default());

        let (status, body) = put(
            builder,
            "/user/profile",
            json!({ "about": "a".repeat(501) }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "ABOUT_TOO_LONG");
    }

    #[actix_web::test]
    async fn test_update_profile_bad_image() {
        let builder =
            TestAppStateBuilder::default().with_update_profile(MockUpdateProfile::default());

        let (status, body) = put(
            builder,
            "/user/profile",
            json!({ "cover_image": { "file_name": "a.png", "content_type": "image/png", "data": "%%%" } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_IMAGE");
    }

    #[actix_web::test]
    async fn test_disable_notifications() {
        let builder = TestAppStateBuilder::default().with_update_notifications(MockNotifications);

        let (status, body) = put(
            builder,
            "/user/notifications",
            json!({ "email_notifications": false }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Email notifications disabled");
        assert_eq!(body["data"]["email_notifications"], false);
    }
}
