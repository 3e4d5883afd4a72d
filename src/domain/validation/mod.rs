//! Field validation that reports every violated rule instead of the first one.
//!
//! Individual field validators live in [`rules`]. Each returns
//! `Result<T, ValidationError>` where the error carries all messages for that
//! field. [`Accumulate`] then combines independent field results: every
//! validator has already run by the time the tuple is built, and the decision
//! to succeed or fail is taken once, at the end.
mod rules;

pub use rules::{
    MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH, body, description, email, optional, password, tags, title, username,
};

use std::fmt;
use thiserror::Error;

/// Ordered, never-empty list of messages for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages(Vec<String>);

impl Messages {
    /// Returns `None` when there is nothing to report.
    pub fn from_vec(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email: {0}")]
    InvalidEmail(Messages),
    #[error("password: {0}")]
    InvalidPassword(Messages),
    #[error("username: {0}")]
    InvalidUsername(Messages),
    #[error("title: {0}")]
    InvalidTitle(Messages),
    #[error("description: {0}")]
    InvalidDescription(Messages),
    #[error("body: {0}")]
    InvalidBody(Messages),
    #[error("tag: {0}")]
    InvalidTag(Messages),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::InvalidPassword(_) => "password",
            Self::InvalidUsername(_) => "username",
            Self::InvalidTitle(_) => "title",
            Self::InvalidDescription(_) => "description",
            Self::InvalidBody(_) => "body",
            Self::InvalidTag(_) => "tag",
        }
    }

    pub fn errors(&self) -> &[String] {
        self.messages().as_slice()
    }

    fn messages(&self) -> &Messages {
        match self {
            Self::InvalidEmail(m)
            | Self::InvalidPassword(m)
            | Self::InvalidUsername(m)
            | Self::InvalidTitle(m)
            | Self::InvalidDescription(m)
            | Self::InvalidBody(m)
            | Self::InvalidTag(m) => m,
        }
    }
}

/// One entry per failing field, in the order the fields were checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_fields(.errors))]
pub struct IncorrectInput {
    errors: Vec<ValidationError>,
}

fn join_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl IncorrectInput {
    /// Returns `None` when `errors` is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Flattens the failures into `"<field>: <message>"` lines.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|err| {
                err.errors()
                    .iter()
                    .map(move |message| format!("{}: {message}", err.field()))
            })
            .collect()
    }
}

impl From<ValidationError> for IncorrectInput {
    fn from(value: ValidationError) -> Self {
        Self {
            errors: vec![value],
        }
    }
}

/// Combines independently evaluated field results.
///
/// Implemented for tuples of `Result<_, ValidationError>`. All failures are
/// kept, in tuple order; the success tuple is only produced when every field
/// passed.
pub trait Accumulate {
    type Output;

    fn accumulate(self) -> Result<Self::Output, IncorrectInput>;
}

macro_rules! impl_accumulate {
    ($($value:ident: $ty:ident),+) => {
        impl<$($ty),+> Accumulate for ($(Result<$ty, ValidationError>,)+) {
            type Output = ($($ty,)+);

            fn accumulate(self) -> Result<Self::Output, IncorrectInput> {
                let ($($value,)+) = self;
                let mut errors = Vec::new();
                $(
                    let $value = match $value {
                        Ok(value) => Some(value),
                        Err(err) => {
                            errors.push(err);
                            None
                        }
                    };
                )+
                match ($($value,)+) {
                    ($(Some($value),)+) => Ok(($($value,)+)),
                    // at least one field is `None`, so `errors` holds its failure
                    _ => Err(IncorrectInput { errors }),
                }
            }
        }
    };
}

impl_accumulate!(a: A);
impl_accumulate!(a: A, b: B);
impl_accumulate!(a: A, b: B, c: C);
impl_accumulate!(a: A, b: B, c: C, d: D);
impl_accumulate!(a: A, b: B, c: C, d: D, e: E);
impl_accumulate!(a: A, b: B, c: C, d: D, e: E, f: F);
