use super::{ArticleQueryService, service::normalize_page};
use crate::application::{
    dto::{ArticleListDto, AuthenticatedUser},
    error::ApplicationResult,
};

#[derive(Debug, Default)]
pub struct FeedQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArticleQueryService {
    pub async fn feed(
        &self,
        viewer: &AuthenticatedUser,
        query: FeedQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);
        let page = self.read_repo.feed(viewer.id, limit, offset).await?;
        Ok(page.into())
    }
}
