use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/post/comment/{comment_id}",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Comment and its replies deleted"),
        (status = 403, description = "Not the comment author"),
        (status = 404, description = "Comment not found")
    )
)]
#[delete("/post/comment/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data.comment.delete.execute(comment_id, user.id()).await {
        Ok(()) => ApiResponse::ok_message("Comment deleted successfully"),

        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(DeleteCommentError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own comments")
        }

        Err(DeleteCommentError::RepositoryError(e)) => {
            error!("Repository error deleting comment {}: {}", comment_id, e);
            ApiResponse::internal_error()
        }
    }
}
