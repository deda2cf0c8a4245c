use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_token_provider() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "BlogSite".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// Same shape main.rs registers; the auth extractor looks this up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_provider());
    web::Data::new(provider)
}

/// Authorization header value for the given user.
pub fn bearer(user_id: Uuid) -> String {
    let token = test_token_provider()
        .generate_access_token(user_id, "someone@example.com")
        .unwrap();
    format!("Bearer {}", token)
}
