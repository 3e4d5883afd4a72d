// src/infrastructure/security/token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::Duration;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

/// Secrets shorter than this are refused at startup.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccessClaims {
    sub: i64,
    iss: String,
    iat: i64,
    exp: i64,
}

/// HS256 access tokens carrying the user id as subject.
#[derive(Clone)]
pub struct JwtTokenManager {
    key: Hmac<Sha256>,
    issuer: String,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        let key = Hmac::new_from_slice(secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            key,
            issuer: issuer.into(),
            ttl,
            clock,
        })
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String> {
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token lifetime overflows the clock"))?;
        let claims = AccessClaims {
            sub: i64::from(user_id),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        claims
            .sign_with_key(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<UserId> {
        let claims: AccessClaims = token.verify_with_key(&self.key).map_err(|err| {
            tracing::debug!(error = %err, "rejected access token");
            ApplicationError::unauthorized("invalid token")
        })?;

        if claims.iss != self.issuer {
            return Err(ApplicationError::unauthorized("invalid token issuer"));
        }
        if self.clock.now().timestamp() >= claims.exp {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        UserId::new(claims.sub).map_err(|_| ApplicationError::unauthorized("invalid token subject"))
    }
}
