use std::env;

pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 86_400;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid JWT_ACCESS_EXPIRY value: {0}")]
    InvalidExpiry(String),

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)")]
    ExpiryOutOfRange,
}

impl JwtConfig {
    /// Builds the config from a variable lookup so it can be checked without touching the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, JwtConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(JwtConfigError::MissingSecret)?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry(raw.clone()))?,
            None => MAX_ACCESS_TOKEN_EXPIRY,
        };
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_TOKEN_EXPIRY {
            return Err(JwtConfigError::ExpiryOutOfRange);
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "BlogSite".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }

    /// Startup-only: panics on a missing or weak configuration.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
            .unwrap_or_else(|e| panic!("Invalid JWT configuration: {}", e))
    }
}
