// src/domain/errors.rs
use crate::domain::validation::{IncorrectInput, ValidationError};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    IncorrectInput(#[from] IncorrectInput),
    #[error("cannot update {0} with only empty values")]
    EmptyUpdate(&'static str),
    #[error("cannot generate a unique slug for '{title}'")]
    CannotGenerateSlug { title: String },
    #[error("username has already been taken")]
    UsernameAlreadyExists,
    #[error("email has already been taken")]
    EmailAlreadyExists,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<ValidationError> for DomainError {
    fn from(value: ValidationError) -> Self {
        Self::IncorrectInput(IncorrectInput::from(value))
    }
}
