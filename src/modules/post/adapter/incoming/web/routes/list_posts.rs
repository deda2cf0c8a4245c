use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::ListPostsError;
use crate::modules::post::application::ports::outgoing::{PageRequest, PostListFilter};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FeedQuery {
    /// 1-based, defaults to 1
    pub page: Option<u32>,

    /// Defaults to 20, capped at 100
    pub per_page: Option<u32>,
}

impl From<FeedQuery> for PageRequest {
    fn from(q: FeedQuery) -> Self {
        PageRequest::new(q.page, q.per_page)
    }
}

async fn list(data: &AppState, filter: PostListFilter, page: PageRequest) -> HttpResponse {
    match data.post.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(ListPostsError::QueryFailed(msg)) => {
            error!("Failed to list posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/post/public",
    tag = "posts",
    params(FeedQuery),
    responses((status = 200, description = "All posts, newest first"))
)]
#[get("/post/public")]
pub async fn public_feed_handler(
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, PostListFilter::everyone(), query.into_inner().into()).await
}

#[utoipa::path(
    get,
    path = "/post/allPost",
    tag = "posts",
    params(FeedQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All posts, newest first"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[get("/post/allPost")]
pub async fn all_posts_handler(
    _user: AuthenticatedUser,
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, PostListFilter::everyone(), query.into_inner().into()).await
}

#[utoipa::path(
    get,
    path = "/post/userFeed",
    tag = "posts",
    params(FeedQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's own posts, newest first"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[get("/post/userFeed")]
pub async fn user_feed_handler(
    user: AuthenticatedUser,
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(
        &data,
        PostListFilter::by_author(user.id()),
        query.into_inner().into(),
    )
    .await
}
