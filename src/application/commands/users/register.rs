use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, RegisterUser},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Duplicate emails and usernames surface as domain conflicts from the
    /// repository.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let input = RegisterUser::parse(&command.username, &command.email, &command.password)?;

        let hashed = self.password_hasher.hash(&input.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(input.email, input.username, password_hash, self.clock.now());

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        self.with_fresh_token(user).await
    }
}
