use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Login,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let input = Login::parse(&command.email, &command.password)?;

        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&input.password, user.password_hash.as_str())
            .await?;

        self.with_fresh_token(user).await
    }
}
