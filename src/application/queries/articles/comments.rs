use super::ArticleQueryService;
use crate::application::{
    dto::{AuthenticatedUser, CommentDto},
    error::ApplicationResult,
};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn list_comments(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article = self.find_article(&query.slug).await?;
        let comments = self
            .comment_repo
            .list_for_article(article.id, viewer.map(|viewer| viewer.id))
            .await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
