use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleReadRepository, entity::DEFAULT_PAGE_LIMIT},
        comment::CommentRepository,
    },
};

const MAX_PAGE_LIMIT: i64 = 100;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
        }
    }

    pub(super) async fn find_article(&self, slug: &str) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}

/// Missing values fall back to the defaults; out of range values are clamped.
pub(super) fn normalize_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}
