// src/application/commands/articles/comments.rs
use super::{ArticleCommandService, ownership::ensure_comment_author};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::input::comment_body,
        comment::{CommentId, NewComment},
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

pub struct DeleteCommentCommand {
    pub slug: String,
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let body = comment_body(&command.body)?;
        let article = self.find_article(&command.slug).await?;

        let now = self.clock.now();
        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: article.id,
                author_id: actor.id,
                body,
                created_at: now,
            })
            .await?;

        let view = self.comment_repo.view(comment, Some(actor.id)).await?;
        Ok(view.into())
    }

    /// A comment addressed through the wrong article is reported as missing.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let article = self.find_article(&command.slug).await?;
        let id = CommentId::new(command.id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;

        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .filter(|comment| comment.article_id == article.id)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        ensure_comment_author(actor, &comment)?;

        self.comment_repo.delete(comment.id).await?;
        Ok(())
    }
}
