pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::media;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::services::{
    GetProfileService, LoginUserService, RegisterUserService, RequestPasswordResetService,
    ResendOtpService, ResetPasswordService, UpdateNotificationSettingsService,
    UpdateProfileService, VerifyOtpService,
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{
    EmailSender, EngagementNotifier, UserEmailNotifier,
};
use crate::email::application::services::{
    BackgroundEngagementNotifier, EmailBranding, UserEmailService,
};
use crate::media::adapter::outgoing::{DisabledImageStorage, HttpImageStorage};
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::outgoing::ImageStorage;
use crate::media::application::services::ImageAttachmentService;
use crate::modules::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::modules::comment::application::comment_use_cases::CommentUseCases;
use crate::modules::comment::application::services::{
    AddCommentService, DeleteCommentService, ListCommentsService, ToggleCommentLikeService,
};
use crate::modules::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::post::application::services::{
    CreatePostService, DeletePostService, EditPostService, ListPostsService,
    TogglePostLikeService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub upload_policy: UploadPolicy,
}

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(not(tarpaulin_include))]
fn build_email_sender() -> SmtpEmailSender {
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");

    if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    }
}

#[cfg(not(tarpaulin_include))]
fn build_image_storage() -> Arc<dyn ImageStorage + Send + Sync> {
    match env::var("IMAGE_UPLOAD_URL") {
        Ok(endpoint) if !endpoint.trim().is_empty() => {
            let token = env::var("IMAGE_UPLOAD_TOKEN").ok();
            let storage =
                HttpImageStorage::new(endpoint, token).expect("Failed to build image upload client");
            Arc::new(storage)
        }
        _ => {
            warn!("IMAGE_UPLOAD_URL is not set, image uploads are disabled");
            Arc::new(DisabledImageStorage)
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run database migrations");
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(BcryptHasher::default());

    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(build_email_sender());
    let user_emails: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(UserEmailService::new(
        email_sender,
        EmailBranding::from_env(),
    ));
    let users: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());
    let engagement: Arc<dyn EngagementNotifier + Send + Sync> = Arc::new(
        BackgroundEngagementNotifier::new(users, Arc::clone(&user_emails)),
    );

    let images = ImageAttachmentService::new(build_image_storage());

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&user_emails),
            images.clone(),
        )),
        verify_otp: Arc::new(VerifyOtpService::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&user_emails),
        )),
        resend_otp: Arc::new(ResendOtpService::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&user_emails),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        request_password_reset: Arc::new(RequestPasswordResetService::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&user_emails),
        )),
        reset_password: Arc::new(ResetPasswordService::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&hasher),
        )),
        get_profile: Arc::new(GetProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone(), images.clone())),
        update_notifications: Arc::new(UpdateNotificationSettingsService::new(user_repo)),
    };

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            post_query.clone(),
            images.clone(),
        )),
        edit: Arc::new(EditPostService::new(
            post_repo.clone(),
            post_query.clone(),
            images,
        )),
        delete: Arc::new(DeletePostService::new(post_repo.clone(), post_query.clone())),
        toggle_like: Arc::new(TogglePostLikeService::new(
            post_repo,
            post_query.clone(),
            Arc::clone(&engagement),
        )),
        list: Arc::new(ListPostsService::new(post_query.clone())),
    };

    let comment = CommentUseCases {
        add: Arc::new(AddCommentService::new(
            comment_repo.clone(),
            comment_query.clone(),
            post_query.clone(),
            engagement,
        )),
        delete: Arc::new(DeleteCommentService::new(
            comment_repo.clone(),
            comment_query.clone(),
        )),
        toggle_like: Arc::new(ToggleCommentLikeService::new(
            comment_repo,
            comment_query.clone(),
        )),
        list: Arc::new(ListCommentsService::new(comment_query, post_query)),
    };

    let state = AppState {
        auth,
        post,
        comment,
        upload_policy: UploadPolicy::from_env(),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as user;
    use crate::modules::comment::adapter::incoming::web::routes as comment;
    use crate::modules::post::adapter::incoming::web::routes as post;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(openapi_json);
    // Users
    cfg.service(user::register_user_handler);
    cfg.service(user::verify_otp_handler);
    cfg.service(user::resend_otp_handler);
    cfg.service(user::login_user_handler);
    cfg.service(user::forgot_password_handler);
    cfg.service(user::reset_password_handler);
    cfg.service(user::get_own_profile_handler);
    cfg.service(user::get_user_profile_handler);
    cfg.service(user::update_profile_handler);
    cfg.service(user::update_notifications_handler);
    // Posts
    cfg.service(post::public_feed_handler);
    cfg.service(post::all_posts_handler);
    cfg.service(post::user_feed_handler);
    cfg.service(post::create_post_handler);
    cfg.service(post::edit_post_handler);
    cfg.service(post::delete_post_handler);
    cfg.service(post::toggle_post_like_handler);
    // Comments
    cfg.service(comment::public_comments_handler);
    cfg.service(comment::add_comment_handler);
    cfg.service(comment::list_comments_handler);
    cfg.service(comment::delete_comment_handler);
    cfg.service(comment::toggle_comment_like_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
