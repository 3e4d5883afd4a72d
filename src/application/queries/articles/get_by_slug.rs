use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_article(&query.slug).await?;
        let view = self
            .read_repo
            .view(article, viewer.map(|viewer| viewer.id))
            .await?;
        Ok(view.into())
    }
}
