use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentId, CommentView, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    async fn view(&self, comment: Comment, viewer: Option<UserId>) -> DomainResult<CommentView>;
    /// Oldest first.
    async fn list_for_article(
        &self,
        article: ArticleId,
        viewer: Option<UserId>,
    ) -> DomainResult<Vec<CommentView>>;
}
