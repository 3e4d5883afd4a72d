// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, Slug};
use crate::domain::user::{Profile, UserId};
use chrono::{DateTime, Utc};

pub const DEFAULT_PAGE_LIMIT: i64 = 20;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author_id == user
    }
}

/// Article as seen by a (possibly anonymous) reader.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub author: Profile,
    pub favorited: bool,
    pub favorites_count: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ArticlePage {
    pub articles: Vec<ArticleView>,
    pub total: i64,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleChanges {
    pub id: ArticleId,
    pub slug: Option<Slug>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleChanges {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            title: None,
            description: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }
}

/// Listing filters. `author` and `favorited_by` are usernames.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            tag: None,
            author: None,
            favorited_by: None,
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}
