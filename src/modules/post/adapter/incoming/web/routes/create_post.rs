use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::media::adapter::incoming::web::{map_image_error, ImagePayload};
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, PostTitleError,
};
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "My first post")]
    pub title: String,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub image: Option<ImagePayload>,
}

/// Shared by create and edit.
pub(crate) fn title_error_response(err: PostTitleError) -> HttpResponse {
    match err {
        PostTitleError::Empty => ApiResponse::bad_request("EMPTY_TITLE", &err.to_string()),
        PostTitleError::TooLong(_) => {
            ApiResponse::bad_request("TITLE_TOO_LONG", &err.to_string())
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/post/create",
    tag = "posts",
    request_body = CreatePostRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Post created", body = PostView),
        (status = 400, description = "Empty or too long title, or invalid image"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[post("/post/create")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let image = match ImagePayload::decode_optional(req.image, &data.upload_policy) {
        Ok(image) => image,
        Err(e) => return map_image_error(e),
    };

    let command = match CreatePostCommand::new(user.id(), req.title, req.content, image) {
        Ok(cmd) => cmd,
        Err(e) => return title_error_response(e),
    };

    match data.post.create.execute(command).await {
        Ok(post) => {
            info!("Post {} created by {}", post.id, user.user_id);
            ApiResponse::created(post)
        }

        Err(CreatePostError::RepositoryError(e)) => {
            error!("Repository error creating post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
