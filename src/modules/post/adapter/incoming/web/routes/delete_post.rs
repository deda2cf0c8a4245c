use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/post/delete/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Post and its comments deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Post not found")
    )
)]
#[delete("/post/delete/{post_id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(post_id, user.id()).await {
        Ok(()) => {
            info!("Post {} deleted by {}", post_id, user.user_id);
            ApiResponse::ok_message("Post deleted successfully")
        }

        Err(DeletePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(DeletePostError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can delete this post")
        }

        Err(DeletePostError::RepositoryError(e)) => {
            error!("Repository error deleting post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
