// tests/support/mocks/security.rs
use async_trait::async_trait;
use conduit_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use conduit_core::domain::user::UserId;

const TOKEN_PREFIX: &str = "token-";

pub fn token_for(id: i64) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/// Reversible "hash" so tests can check what was stored.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Tokens look like `token-<user id>`.
#[derive(Clone, Debug, Default)]
pub struct StubTokenManager;

#[async_trait]
impl TokenManager for StubTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String> {
        Ok(token_for(i64::from(user_id)))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<UserId> {
        token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
