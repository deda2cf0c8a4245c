use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::domain::entities::LikeToggle;
use crate::modules::post::application::ports::incoming::use_cases::TogglePostLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TogglePostLikeRequest {
    pub post_id: Uuid,
}

#[utoipa::path(
    patch,
    path = "/post/like",
    tag = "posts",
    request_body = TogglePostLikeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Like state after the toggle", body = LikeToggle),
        (status = 403, description = "Authors cannot like their own post"),
        (status = 404, description = "Post not found")
    )
)]
#[patch("/post/like")]
pub async fn toggle_post_like_handler(
    user: AuthenticatedUser,
    req: web::Json<TogglePostLikeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = req.into_inner().post_id;

    match data.post.toggle_like.execute(post_id, user.id()).await {
        Ok(toggle) => {
            let message = if toggle.liked {
                "Post liked"
            } else {
                "Post unliked"
            };
            ApiResponse::success_with_message(message, toggle)
        }

        Err(TogglePostLikeError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(TogglePostLikeError::SelfLikeForbidden) => {
            ApiResponse::forbidden("SELF_LIKE_FORBIDDEN", "You cannot like your own post")
        }

        Err(TogglePostLikeError::RepositoryError(e)) => {
            error!("Repository error toggling like on post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
