use crate::domain::user::{Profile, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserDto {
    pub fn from_parts(user: User, token: String) -> Self {
        Self {
            email: user.email.into(),
            token,
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.username.into(),
            bio: profile.bio,
            image: profile.image,
            following: profile.following,
        }
    }
}
