use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::domain::entities::CommentNode;
use crate::modules::comment::application::ports::incoming::use_cases::ListCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CommentsQuery {
    /// Post id
    pub id: Uuid,
}

async fn comment_tree(data: &AppState, post_id: Uuid) -> HttpResponse {
    match data.comment.list.execute(post_id).await {
        Ok(tree) => ApiResponse::success(tree),

        Err(ListCommentsError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(ListCommentsError::QueryFailed(msg)) => {
            error!("Failed to load comments of post {}: {}", post_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/post/comment",
    tag = "comments",
    params(CommentsQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Comment tree, oldest first", body = [CommentNode]),
        (status = 404, description = "Post not found")
    )
)]
#[get("/post/comment")]
pub async fn list_comments_handler(
    _user: AuthenticatedUser,
    query: web::Query<CommentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    comment_tree(&data, query.into_inner().id).await
}

#[utoipa::path(
    get,
    path = "/post/public/comments/{post_id}",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comment tree, oldest first", body = [CommentNode]),
        (status = 404, description = "Post not found")
    )
)]
#[get("/post/public/comments/{post_id}")]
pub async fn public_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    comment_tree(&data, path.into_inner()).await
}
