// src/domain/user/input.rs
//! Validated user requests. Each constructor runs every field validator and
//! reports all failing fields together.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{Email, UserId, Username};
use crate::domain::validation::{self, Accumulate, IncorrectInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: Username,
    pub email: Email,
    pub password: String,
}

impl RegisterUser {
    pub fn parse(username: &str, email: &str, password: &str) -> Result<Self, IncorrectInput> {
        let (username, email, password) = (
            Username::parse(username),
            Email::parse(email),
            validation::password(password),
        )
            .accumulate()?;
        Ok(Self {
            username,
            email,
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub email: Email,
    pub password: String,
}

impl Login {
    pub fn parse(email: &str, password: &str) -> Result<Self, IncorrectInput> {
        let (email, password) = (Email::parse(email), validation::password(password)).accumulate()?;
        Ok(Self { email, password })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub email: Option<Email>,
    pub username: Option<Username>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UpdateUser {
    /// Absent fields are skipped. Once every present field is valid, an
    /// update with nothing in it is rejected as `EmptyUpdate`.
    pub fn parse(
        user_id: UserId,
        email: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        bio: Option<String>,
        image: Option<String>,
    ) -> DomainResult<Self> {
        let (email, username, password) = (
            validation::optional(email, Email::parse),
            validation::optional(username, Username::parse),
            validation::optional(password, validation::password),
        )
            .accumulate()?;

        let update = Self {
            user_id,
            email,
            username,
            password,
            bio,
            image,
        };
        if update.is_empty() {
            return Err(DomainError::EmptyUpdate("user"));
        }
        Ok(update)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}
