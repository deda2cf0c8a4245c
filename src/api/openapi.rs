use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordRequest, LoginRequest, NotificationSettingsRequest, RegisterUserRequest,
    ResendOtpRequest, ResetPasswordRequest, UpdateProfileRequest, VerifyOtpRequest,
};
use crate::media::adapter::incoming::web::ImagePayload;
use crate::modules::comment::adapter::incoming::web::routes::{
    AddCommentRequest, ToggleCommentLikeRequest,
};
use crate::modules::comment::application::domain::entities::CommentNode;
use crate::modules::post::adapter::incoming::web::routes::{
    CreatePostRequest, EditPostRequest, TogglePostLikeRequest,
};
use crate::modules::post::application::domain::entities::{AuthorSummary, LikeToggle};
use crate::modules::post::application::ports::outgoing::PostView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BlogSite API",
        version = "1.0.0",
        description = "Blogging backend: accounts, posts, nested comments and likes",
    ),
    paths(
        // Users
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::resend_otp_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::get_own_profile_handler,
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_notifications_handler,

        // Posts
        crate::modules::post::adapter::incoming::web::routes::public_feed_handler,
        crate::modules::post::adapter::incoming::web::routes::all_posts_handler,
        crate::modules::post::adapter::incoming::web::routes::user_feed_handler,
        crate::modules::post::adapter::incoming::web::routes::create_post_handler,
        crate::modules::post::adapter::incoming::web::routes::edit_post_handler,
        crate::modules::post::adapter::incoming::web::routes::delete_post_handler,
        crate::modules::post::adapter::incoming::web::routes::toggle_post_like_handler,

        // Comments
        crate::modules::comment::adapter::incoming::web::routes::add_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::list_comments_handler,
        crate::modules::comment::adapter::incoming::web::routes::public_comments_handler,
        crate::modules::comment::adapter::incoming::web::routes::delete_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::toggle_comment_like_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // User DTOs
            RegisterUserRequest,
            VerifyOtpRequest,
            ResendOtpRequest,
            LoginRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            UpdateProfileRequest,
            NotificationSettingsRequest,
            ImagePayload,

            // Post DTOs
            CreatePostRequest,
            EditPostRequest,
            TogglePostLikeRequest,
            PostView,
            AuthorSummary,
            LikeToggle,

            // Comment DTOs
            AddCommentRequest,
            ToggleCommentLikeRequest,
            CommentNode
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, verification and login"),
        (name = "users", description = "Profiles and notification settings"),
        (name = "posts", description = "Posts, feeds and post likes"),
        (name = "comments", description = "Nested comments and comment likes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /user/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/user/register",
            "/user/reset-password/{token}",
            "/user/profile/{user_id}",
            "/post/public",
            "/post/edit/{post_id}",
            "/post/comment",
            "/post/comment/like",
            "/post/public/comments/{post_id}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn document_has_an_operation_per_handler() {
        let doc = ApiDoc::openapi();
        let operations: usize = doc
            .paths
            .paths
            .values()
            .map(|item| {
                [&item.get, &item.post, &item.put, &item.patch, &item.delete]
                    .iter()
                    .filter(|op| op.is_some())
                    .count()
            })
            .sum();

        assert_eq!(operations, 22);
    }

    #[test]
    fn bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn image_bearing_requests_have_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;

        for name in ["ImagePayload", "UpdateProfileRequest", "CreatePostRequest"] {
            assert!(schemas.contains_key(name), "missing {}", name);
        }
    }
}
