use super::{ArticleQueryService, service::normalize_page};
use crate::{
    application::{
        dto::{ArticleListDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);
        let filter = ArticleFilter {
            tag: query.tag,
            author: query.author,
            favorited_by: query.favorited,
            limit,
            offset,
        };

        let page = self
            .read_repo
            .list(filter, viewer.map(|viewer| viewer.id))
            .await?;
        Ok(page.into())
    }
}
