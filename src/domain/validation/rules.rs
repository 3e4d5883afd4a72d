// src/domain/validation/rules.rs
use std::sync::LazyLock;

use regex::Regex;

use super::{Messages, ValidationError};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 350;
pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 25;

#[derive(Debug, Clone, Copy)]
enum Rule {
    NotBlank,
    MinLength(usize),
    MaxLength(usize),
    EmailFormat,
}

const PASSWORD: &[Rule] = &[
    Rule::NotBlank,
    Rule::MinLength(MIN_PASSWORD_LENGTH),
    Rule::MaxLength(MAX_PASSWORD_LENGTH),
];
const EMAIL: &[Rule] = &[
    Rule::NotBlank,
    Rule::MaxLength(MAX_EMAIL_LENGTH),
    Rule::EmailFormat,
];
const USERNAME: &[Rule] = &[
    Rule::NotBlank,
    Rule::MinLength(MIN_USERNAME_LENGTH),
    Rule::MaxLength(MAX_USERNAME_LENGTH),
];
const NOT_BLANK: &[Rule] = &[Rule::NotBlank];

fn characters(count: usize) -> &'static str {
    if count == 1 { "character" } else { "characters" }
}

impl Rule {
    fn violation(self, value: &str) -> Option<String> {
        match self {
            Rule::NotBlank => value
                .trim()
                .is_empty()
                .then(|| "Cannot be blank".to_string()),
            Rule::MinLength(min) => (value.chars().count() < min)
                .then(|| format!("is too short (minimum is {min} {})", characters(min))),
            Rule::MaxLength(max) => (value.chars().count() > max)
                .then(|| format!("is too long (maximum is {max} {})", characters(max))),
            Rule::EmailFormat => {
                (!looks_like_email(value)).then(|| format!("'{value}' is invalid email"))
            }
        }
    }
}

/// Whole-string `.+@.+\..+`, where `.` is anything except a line terminator.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\n\r\x{85}\x{2028}\x{2029}]+@[^\n\r\x{85}\x{2028}\x{2029}]+\.[^\n\r\x{85}\x{2028}\x{2029}]+$")
        .expect("email pattern compiles")
});

fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Runs every rule, never stopping at the first violation.
fn check(value: String, rules: &[Rule]) -> Result<String, Messages> {
    let violations = rules
        .iter()
        .filter_map(|rule| rule.violation(&value))
        .collect();
    match Messages::from_vec(violations) {
        None => Ok(value),
        Some(messages) => Err(messages),
    }
}

pub fn password(raw: &str) -> Result<String, ValidationError> {
    check(raw.to_owned(), PASSWORD).map_err(ValidationError::InvalidPassword)
}

pub fn email(raw: &str) -> Result<String, ValidationError> {
    check(raw.trim().to_owned(), EMAIL).map_err(ValidationError::InvalidEmail)
}

pub fn username(raw: &str) -> Result<String, ValidationError> {
    check(raw.trim().to_owned(), USERNAME).map_err(ValidationError::InvalidUsername)
}

pub fn title(raw: &str) -> Result<String, ValidationError> {
    check(raw.trim().to_owned(), NOT_BLANK).map_err(ValidationError::InvalidTitle)
}

pub fn description(raw: &str) -> Result<String, ValidationError> {
    check(raw.trim().to_owned(), NOT_BLANK).map_err(ValidationError::InvalidDescription)
}

pub fn body(raw: &str) -> Result<String, ValidationError> {
    check(raw.trim().to_owned(), NOT_BLANK).map_err(ValidationError::InvalidBody)
}

/// Trims every tag and drops repeats, keeping the first occurrence.
/// Each blank tag contributes one message.
pub fn tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, ValidationError> {
    let mut accepted: Vec<String> = Vec::with_capacity(raw.len());
    let mut violations = Vec::new();
    for tag in raw {
        match check(tag.as_ref().trim().to_owned(), NOT_BLANK) {
            Ok(tag) if accepted.contains(&tag) => {}
            Ok(tag) => accepted.push(tag),
            Err(messages) => violations.extend(messages.into_vec()),
        }
    }
    match Messages::from_vec(violations) {
        None => Ok(accepted),
        Some(messages) => Err(ValidationError::InvalidTag(messages)),
    }
}

/// Validates `raw` only when it was provided.
pub fn optional<T>(
    raw: Option<&str>,
    validate: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    raw.map(validate).transpose()
}
