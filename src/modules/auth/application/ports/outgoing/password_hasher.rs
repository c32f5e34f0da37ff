use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// The stored hash is unusable; a wrong password is `Ok(false)`.
    #[error("Stored password hash could not be checked")]
    VerifyFailed,

    #[error("Hashing task was cancelled")]
    TaskFailed,
}

/// Customers, vendors and admins use Argon2id; super admins use bcrypt.
/// Hashing runs on a blocking thread in every implementation.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, HashError>;
}
