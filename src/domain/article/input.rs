// src/domain/article/input.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{self, Accumulate, IncorrectInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl CreateArticle {
    pub fn parse<S: AsRef<str>>(
        title: &str,
        description: &str,
        body: &str,
        tags: &[S],
    ) -> Result<Self, IncorrectInput> {
        let (title, description, body, tags) = (
            validation::title(title),
            validation::description(description),
            validation::body(body),
            validation::tags(tags),
        )
            .accumulate()?;
        Ok(Self {
            title,
            description,
            body,
            tags,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl UpdateArticle {
    pub fn parse(
        title: Option<&str>,
        description: Option<&str>,
        body: Option<&str>,
    ) -> DomainResult<Self> {
        let (title, description, body) = (
            validation::optional(title, validation::title),
            validation::optional(description, validation::description),
            validation::optional(body, validation::body),
        )
            .accumulate()?;

        let update = Self {
            title,
            description,
            body,
        };
        if update.title.is_none() && update.description.is_none() && update.body.is_none() {
            return Err(DomainError::EmptyUpdate("article"));
        }
        Ok(update)
    }
}

/// Single-field input for comments.
pub fn comment_body(raw: &str) -> Result<String, IncorrectInput> {
    let (body,) = (validation::body(raw),).accumulate()?;
    Ok(body)
}
