use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::GetProfileError;
use crate::modules::post::adapter::incoming::web::routes::FeedQuery;
use crate::modules::post::application::ports::outgoing::{PageResult, PostListFilter, PostView};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

/// A profile together with a page of the user's posts, newest first.
#[derive(Debug, Serialize)]
pub struct ProfileWithPosts {
    pub user: UserProfile,
    pub posts: PageResult<PostView>,
}

async fn profile_with_posts(data: &AppState, user_id: UserId, query: FeedQuery) -> HttpResponse {
    let user = match data.auth.get_profile.execute(user_id).await {
        Ok(user) => user,

        Err(GetProfileError::UserNotFound) => {
            return ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetProfileError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load profile");
            return ApiResponse::internal_error();
        }
    };

    match data
        .post
        .list
        .execute(PostListFilter::by_author(user_id), query.into())
        .await
    {
        Ok(posts) => ApiResponse::success(ProfileWithPosts { user, posts }),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to load profile posts");
            ApiResponse::internal_error()
        }
    }
}

/// Current user's profile with their posts
#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "users",
    params(FeedQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile and posts"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists")
    )
)]
#[get("/user/profile")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    profile_with_posts(&data, user.id(), query.into_inner()).await
}

/// Another user's profile with their posts
#[utoipa::path(
    get,
    path = "/user/profile/{user_id}",
    tag = "users",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        FeedQuery
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile and posts"),
        (status = 404, description = "User not found")
    )
)]
#[get("/user/profile/{user_id}")]
pub async fn get_user_profile_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    profile_with_posts(&data, UserId::from(path.into_inner()), query.into_inner()).await
}
