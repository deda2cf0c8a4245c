use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Hashing worker stopped before finishing")]
    WorkerLost,
}

/// Salted, adaptive password hashing. Implementations must not block the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a plain mismatch; `Err` only when the stored hash is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
