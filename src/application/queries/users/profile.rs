use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        viewer: Option<&AuthenticatedUser>,
        username: &str,
    ) -> ApplicationResult<ProfileDto> {
        let username =
            Username::parse(username).map_err(|_| ApplicationError::not_found("profile not found"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let following = match viewer {
            Some(viewer) if viewer.id != user.id => {
                self.user_repo.is_following(viewer.id, user.id).await?
            }
            _ => false,
        };
        Ok(user.profile(following).into())
    }
}
