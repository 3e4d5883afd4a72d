// src/application/commands/articles/slug.rs
use async_trait::async_trait;

use crate::domain::{
    article::{ArticleId, ArticleReadRepository, Slug, UniquenessOracle},
    errors::DomainResult,
};

/// Storage-backed uniqueness check. When `owner` is set, the slug already
/// held by that article counts as free so a retitled article may keep it.
pub struct SlugAvailability<'a> {
    repo: &'a dyn ArticleReadRepository,
    owner: Option<ArticleId>,
}

impl<'a> SlugAvailability<'a> {
    pub fn new(repo: &'a dyn ArticleReadRepository) -> Self {
        Self { repo, owner: None }
    }

    pub fn owned_by(repo: &'a dyn ArticleReadRepository, owner: ArticleId) -> Self {
        Self {
            repo,
            owner: Some(owner),
        }
    }
}

#[async_trait]
impl UniquenessOracle for SlugAvailability<'_> {
    async fn is_unique(&self, candidate: &Slug) -> DomainResult<bool> {
        match self.owner {
            None => Ok(!self.repo.slug_exists(candidate).await?),
            Some(owner) => Ok(self
                .repo
                .find_by_slug(candidate.as_str())
                .await?
                .is_none_or(|existing| existing.id == owner)),
        }
    }
}
