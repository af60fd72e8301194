use anyhow::Context as _;

use crate::domain::repository::PasswordHasher;
use crate::error::BackendError;

/// bcrypt-backed [`PasswordHasher`]. Hashing runs on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    pub cost: u32,
}

impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .context("join password hash task")?
            .context("hash password")?;
        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .context("join password verify task")?
            .context("verify password")?;
        Ok(matched)
    }
}
