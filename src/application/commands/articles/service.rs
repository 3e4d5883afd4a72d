// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository, SlugGenerator},
        comment::CommentRepository,
        user::UserId,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) slugs: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        slugs: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            comment_repo,
            slugs,
            clock,
        }
    }

    pub(super) async fn find_article(&self, slug: &str) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn present(
        &self,
        article: Article,
        viewer: UserId,
    ) -> ApplicationResult<ArticleDto> {
        let view = self.read_repo.view(article, Some(viewer)).await?;
        Ok(view.into())
    }
}
