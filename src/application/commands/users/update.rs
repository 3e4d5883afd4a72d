use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::user::{PasswordHash, UpdateUser, UserChanges},
};

pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let input = UpdateUser::parse(
            actor.id,
            command.email.as_deref(),
            command.username.as_deref(),
            command.password.as_deref(),
            command.bio,
            command.image,
        )?;

        let password_hash = match input.password.as_deref() {
            Some(password) => {
                let hashed = self.password_hasher.hash(password).await?;
                Some(PasswordHash::new(hashed)?)
            }
            None => None,
        };

        let changes = UserChanges::new(input.user_id, self.clock.now())
            .with_email(input.email)
            .with_username(input.username)
            .with_password_hash(password_hash)
            .with_bio(input.bio)
            .with_image(input.image);

        let user = self.user_repo.update(changes).await?;
        Ok(UserDto::from_parts(user, actor.token.clone()))
    }
}
