// src/application/commands/articles/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::Article, comment::Comment},
};

pub(super) fn ensure_article_author(
    actor: &AuthenticatedUser,
    article: &Article,
    action: &str,
) -> ApplicationResult<()> {
    if article.is_authored_by(actor.id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "only the author may {action} this article"
        )))
    }
}

pub(super) fn ensure_comment_author(
    actor: &AuthenticatedUser,
    comment: &Comment,
) -> ApplicationResult<()> {
    if comment.author_id == actor.id {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author may delete this comment",
        ))
    }
}
