use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserProfile,
    ports::{
        incoming::use_cases::{LoginCommand, LoginError, LoginResult, LoginUserUseCase},
        outgoing::{PasswordHasher, TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        // Only reported once the password matched.
        if !user.is_email_verified {
            return Err(LoginError::EmailNotVerified);
        }

        let token = self
            .tokens
            .generate_access_token(user.id.value(), &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_ttl_seconds(),
            user: UserProfile::from(user),
        })
    }
}
