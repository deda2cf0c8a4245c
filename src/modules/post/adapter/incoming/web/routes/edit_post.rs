use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_post::title_error_response;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::media::adapter::incoming::web::{map_image_error, ImagePayload};
use crate::modules::post::application::ports::incoming::use_cases::{
    EditPostCommand, EditPostError,
};
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditPostRequest {
    pub title: String,

    /// Omit to keep the current body
    #[serde(default)]
    pub content: Option<String>,

    /// Omit to keep the current image
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

#[utoipa::path(
    put,
    path = "/post/edit/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = EditPostRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Post updated", body = PostView),
        (status = 400, description = "Invalid title or image"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Post not found")
    )
)]
#[put("/post/edit/{post_id}")]
pub async fn edit_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<EditPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let req = req.into_inner();

    let image = match ImagePayload::decode_optional(req.image, &data.upload_policy) {
        Ok(image) => image,
        Err(e) => return map_image_error(e),
    };

    let command = match EditPostCommand::new(post_id, user.id(), req.title, req.content, image) {
        Ok(cmd) => cmd,
        Err(e) => return title_error_response(e),
    };

    match data.post.edit.execute(command).await {
        Ok(post) => {
            info!("Post {} edited", post.id);
            ApiResponse::success(post)
        }

        Err(EditPostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),

        Err(EditPostError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can edit this post")
        }

        Err(EditPostError::RepositoryError(e)) => {
            error!("Repository error editing post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
