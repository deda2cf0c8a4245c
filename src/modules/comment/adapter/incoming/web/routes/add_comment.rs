use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::domain::entities::CommentNode;
use crate::modules::comment::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentCommandError, AddCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send `post_id` for a top-level comment or `comment_id` for a reply, never both.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub content: String,

    #[serde(default)]
    pub post_id: Option<Uuid>,

    #[serde(default)]
    pub comment_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/post/comment",
    tag = "comments",
    request_body = AddCommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Comment added", body = CommentNode),
        (status = 400, description = "Empty content or ambiguous target"),
        (status = 403, description = "Authors cannot comment on their own post"),
        (status = 404, description = "Post or parent comment not found")
    )
)]
#[post("/post/comment")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    req: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match AddCommentCommand::new(user.id(), req.content, req.post_id, req.comment_id)
    {
        Ok(cmd) => cmd,
        Err(e) => {
            let code = match e {
                AddCommentCommandError::EmptyContent => "EMPTY_COMMENT",
                AddCommentCommandError::ContentTooLong(_) => "COMMENT_TOO_LONG",
                AddCommentCommandError::InvalidTarget => "INVALID_TARGET",
            };
            return ApiResponse::bad_request(code, &e.to_string());
        }
    };

    match data.comment.add.execute(command).await {
        Ok(comment) => ApiResponse::created(comment),

        Err(AddCommentError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(AddCommentError::ParentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(AddCommentError::SelfCommentForbidden) => ApiResponse::forbidden(
            "SELF_COMMENT_FORBIDDEN",
            "You cannot comment on your own post",
        ),

        Err(AddCommentError::RepositoryError(e)) => {
            error!("Repository error adding comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
