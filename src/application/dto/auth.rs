use crate::domain::user::UserId;

/// Caller identity resolved from a verified access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub token: String,
}
