use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleCommandService {
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_article(slug).await?;
        self.write_repo.favorite(actor.id, article.id).await?;
        self.present(article, actor.id).await
    }

    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_article(slug).await?;
        self.write_repo.unfavorite(actor.id, article.id).await?;
        self.present(article, actor.id).await
    }
}
