use crate::domain::article::{ArticlePage, ArticleView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProfileDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileDto,
}

impl From<ArticleView> for ArticleDto {
    fn from(view: ArticleView) -> Self {
        let ArticleView {
            article,
            author,
            favorited,
            favorites_count,
        } = view;
        Self {
            slug: article.slug.into_inner(),
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count,
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub articles_count: i64,
}

impl From<ArticlePage> for ArticleListDto {
    fn from(page: ArticlePage) -> Self {
        Self {
            articles: page.articles.into_iter().map(ArticleDto::from).collect(),
            articles_count: page.total,
        }
    }
}
