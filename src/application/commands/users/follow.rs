use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

impl UserCommandService {
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.find_profile_owner(username).await?;
        if target.id == actor.id {
            return Err(ApplicationError::forbidden("cannot follow yourself"));
        }

        self.user_repo.follow(actor.id, target.id).await?;
        Ok(target.profile(true).into())
    }

    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.find_profile_owner(username).await?;

        self.user_repo.unfollow(actor.id, target.id).await?;
        Ok(target.profile(false).into())
    }

    async fn find_profile_owner(&self, username: &str) -> ApplicationResult<User> {
        let username =
            Username::parse(username).map_err(|_| ApplicationError::not_found("profile not found"))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))
    }
}
