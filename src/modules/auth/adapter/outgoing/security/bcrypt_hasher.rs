use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::task;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// bcrypt with a random per-hash salt. Work runs on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|_| HashError::WorkerLost)?
            .map_err(|e| HashError::Hashing(e.to_string()))
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|_| HashError::WorkerLost)?
            .map_err(|_| HashError::MalformedHash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::with_cost(4);
        let password = "SecurePassword123";

        let hashed = hasher.hash_password(password).await.unwrap();
        assert_ne!(hashed, password);
        assert!(hashed.starts_with("$2"));

        assert!(hasher.verify_password(password, &hashed).await.unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());

        let invalid = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(invalid, Err(HashError::MalformedHash)));
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salts() {
        let hasher = BcryptHasher::with_cost(4);

        let a = hasher.hash_password("password1").await.unwrap();
        let b = hasher.hash_password("password1").await.unwrap();

        assert_ne!(a, b);
    }
}
