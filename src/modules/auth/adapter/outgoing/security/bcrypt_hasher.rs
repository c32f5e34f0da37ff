use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};

pub const SUPER_ADMIN_COST: u32 = 12;

/// bcrypt hasher for super-admin accounts.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(SUPER_ADMIN_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        // Minimum cost keeps the test fast.
        let hasher = BcryptHasher::new(4);

        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();

        assert!(hasher.verify_password("SecurePassword123", &hashed).await.unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_hash() {
        let result = BcryptHasher::new(4)
            .verify_password("SecurePassword123", "invalid-hash")
            .await;
        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_invalid_cost() {
        let result = BcryptHasher::new(2).hash_password("SecurePassword123").await;
        assert!(matches!(result, Err(HashError::HashFailed)));
    }

    #[test]
    fn default_cost_is_twelve() {
        assert_eq!(BcryptHasher::default().cost, 12);
    }
}
