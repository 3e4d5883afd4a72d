// src/application/ports/security.rs
use crate::{application::ApplicationResult, domain::user::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `Unauthorized` when the password does not match.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String>;
    /// Fails with `Unauthorized` for forged, expired or foreign tokens.
    async fn authenticate(&self, token: &str) -> ApplicationResult<UserId>;
}
