use crate::domain::article::entity::{
    Article, ArticleChanges, ArticleFilter, ArticlePage, ArticleView, NewArticle,
};
use crate::domain::article::value_objects::{ArticleId, Slug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Idempotent.
    async fn favorite(&self, user: UserId, article: ArticleId) -> DomainResult<()>;
    /// Idempotent.
    async fn unfavorite(&self, user: UserId, article: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>>;
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool>;
    async fn view(&self, article: Article, viewer: Option<UserId>) -> DomainResult<ArticleView>;
    /// Newest first; `total` counts every match, ignoring limit and offset.
    async fn list(&self, filter: ArticleFilter, viewer: Option<UserId>)
    -> DomainResult<ArticlePage>;
    /// Articles written by users that `viewer` follows, newest first.
    async fn feed(&self, viewer: UserId, limit: i64, offset: i64) -> DomainResult<ArticlePage>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All known tag names, alphabetical.
    async fn list(&self) -> DomainResult<Vec<String>>;
}
