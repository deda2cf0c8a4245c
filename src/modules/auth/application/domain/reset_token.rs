use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const RESET_TOKEN_TTL_HOURS: i64 = 1;
pub const MIN_PASSWORD_LEN: usize = 8;

/// A freshly issued reset token. Only `token_hash` is persisted; `token` goes out by email.
#[derive(Debug, Clone)]
pub struct PasswordResetTicket {
    pub token: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetTicket {
    pub fn issue(now: DateTime<Utc>) -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);

        let token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        let token_hash = hash_token(&token);

        Self {
            token,
            token_hash,
            expires_at: now + Duration::hours(RESET_TOKEN_TTL_HOURS),
        }
    }
}

/// SHA-256 hex digest. Raw reset tokens are never stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
