use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::ToggleCommentLikeError;
use crate::modules::post::application::domain::entities::LikeToggle;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleCommentLikeRequest {
    pub comment_id: Uuid,
}

#[utoipa::path(
    patch,
    path = "/post/comment/like",
    tag = "comments",
    request_body = ToggleCommentLikeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Like state after the toggle", body = LikeToggle),
        (status = 404, description = "Comment not found")
    )
)]
#[patch("/post/comment/like")]
pub async fn toggle_comment_like_handler(
    user: AuthenticatedUser,
    req: web::Json<ToggleCommentLikeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = req.into_inner().comment_id;

    match data.comment.toggle_like.execute(comment_id, user.id()).await {
        Ok(toggle) if toggle.liked => ApiResponse::success_with_message("Comment liked", toggle),
        Ok(toggle) => ApiResponse::success_with_message("Comment unliked", toggle),

        Err(ToggleCommentLikeError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(ToggleCommentLikeError::RepositoryError(e)) => {
            error!("Repository error toggling like on comment {}: {}", comment_id, e);
            ApiResponse::internal_error()
        }
    }
}
