// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, ownership::ensure_article_author};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.find_article(&command.slug).await?;
        ensure_article_author(actor, &article, "delete")?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(slug = %article.slug, "article deleted");
        Ok(())
    }
}
