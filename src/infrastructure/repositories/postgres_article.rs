// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleChanges, ArticleFilter, ArticleId, ArticlePage, ArticleReadRepository,
    ArticleView, ArticleWriteRepository, NewArticle, Slug,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Profile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "a.id, a.slug, a.title, a.description, a.body, a.author_id, \
     a.created_at, a.updated_at, \
     ARRAY(SELECT t.name FROM article_tags at JOIN tags t ON t.id = at.tag_id \
           WHERE at.article_id = a.id ORDER BY at.position) AS tags";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: Slug::from_stored(row.slug)?,
            title: row.title,
            description: row.description,
            body: row.body,
            tags: row.tags,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Author profile and favorite state relative to one viewer.
#[derive(Debug, FromRow)]
struct ViewerRow {
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
    following: bool,
    favorited: bool,
    favorites_count: i64,
}

impl ViewerRow {
    fn into_view(self, article: Article) -> DomainResult<ArticleView> {
        Ok(ArticleView {
            article,
            author: Profile {
                username: Username::from_stored(self.author_username)?,
                bio: self.author_bio,
                image: self.author_image,
                following: self.following,
            },
            favorited: self.favorited,
            favorites_count: self.favorites_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    #[sqlx(flatten)]
    viewer: ViewerRow,
}

impl TryFrom<ArticleViewRow> for ArticleView {
    type Error = DomainError;

    fn try_from(row: ArticleViewRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        row.viewer.into_view(article)
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tags,
            author_id,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO articles AS a (slug, title, description, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .bind(&title)
            .bind(&description)
            .bind(&body)
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if !tags.is_empty() {
            sqlx::query("INSERT INTO tags (name) SELECT UNNEST($1::text[]) ON CONFLICT (name) DO NOTHING")
                .bind(&tags)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;

            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id, position)
                 SELECT $1, t.id, input.position
                 FROM UNNEST($2::text[]) WITH ORDINALITY AS input(name, position)
                 JOIN tags t ON t.name = input.name",
            )
            .bind(row.id)
            .bind(&tags)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        let mut created = Article::try_from(row)?;
        created.tags = tags;
        Ok(created)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article> {
        let ArticleChanges {
            id,
            slug,
            title,
            description,
            body,
            updated_at,
        } = changes;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles AS a SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body);
        }

        builder.push(" WHERE a.id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn favorite(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user))
        .bind(i64::from(article))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfavorite(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user))
            .bind(i64::from(article))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

enum Scope<'q> {
    Filter(&'q ArticleFilter),
    FeedOf(UserId),
}

impl PostgresArticleReadRepository {
    fn push_viewer_columns(builder: &mut QueryBuilder<'_, Postgres>, viewer: Option<i64>) {
        builder.push(
            ", u.username AS author_username, u.bio AS author_bio, u.image AS author_image, \
             EXISTS (SELECT 1 FROM follows f WHERE f.followee_id = a.author_id AND f.follower_id = ",
        );
        builder.push_bind(viewer);
        builder.push(
            ") AS following, \
             EXISTS (SELECT 1 FROM favorites fv WHERE fv.article_id = a.id AND fv.user_id = ",
        );
        builder.push_bind(viewer);
        builder.push(
            ") AS favorited, \
             (SELECT COUNT(*) FROM favorites fc WHERE fc.article_id = a.id) AS favorites_count",
        );
    }

    fn push_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, scope: &Scope<'a>) {
        builder.push(" WHERE TRUE");
        match scope {
            Scope::Filter(filter) => {
                if let Some(tag) = &filter.tag {
                    builder.push(
                        " AND EXISTS (SELECT 1 FROM article_tags at JOIN tags t ON t.id = at.tag_id \
                         WHERE at.article_id = a.id AND t.name = ",
                    );
                    builder.push_bind(tag.as_str());
                    builder.push(")");
                }
                if let Some(author) = &filter.author {
                    builder.push(" AND u.username = ");
                    builder.push_bind(author.as_str());
                }
                if let Some(favorited_by) = &filter.favorited_by {
                    builder.push(
                        " AND EXISTS (SELECT 1 FROM favorites ff JOIN users fu ON fu.id = ff.user_id \
                         WHERE ff.article_id = a.id AND fu.username = ",
                    );
                    builder.push_bind(favorited_by.as_str());
                    builder.push(")");
                }
            }
            Scope::FeedOf(viewer) => {
                builder.push(" AND a.author_id IN (SELECT followee_id FROM follows WHERE follower_id = ");
                builder.push_bind(i64::from(*viewer));
                builder.push(")");
            }
        }
    }

    async fn page(
        &self,
        scope: Scope<'_>,
        viewer: Option<UserId>,
        limit: i64,
        offset: i64,
    ) -> DomainResult<ArticlePage> {
        let viewer = viewer.map(i64::from);

        let mut count: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT COUNT(*) FROM articles a JOIN users u ON u.id = a.author_id",
        );
        Self::push_conditions(&mut count, &scope);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(ARTICLE_COLUMNS);
        Self::push_viewer_columns(&mut select, viewer);
        select.push(" FROM articles a JOIN users u ON u.id = a.author_id");
        Self::push_conditions(&mut select, &scope);
        select.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        select.push_bind(limit);
        select.push(" OFFSET ");
        select.push_bind(offset);

        let rows = select
            .build_query_as::<ArticleViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(ArticleView::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(ArticlePage { articles, total })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn view(&self, article: Article, viewer: Option<UserId>) -> DomainResult<ArticleView> {
        let viewer = viewer.map(i64::from);
        let row = sqlx::query_as::<_, ViewerRow>(
            "SELECT u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                    EXISTS (SELECT 1 FROM follows WHERE follower_id = $3 AND followee_id = u.id) AS following,
                    EXISTS (SELECT 1 FROM favorites WHERE user_id = $3 AND article_id = $2) AS favorited,
                    (SELECT COUNT(*) FROM favorites WHERE article_id = $2) AS favorites_count
             FROM users u WHERE u.id = $1",
        )
        .bind(i64::from(article.author_id))
        .bind(i64::from(article.id))
        .bind(viewer)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        row.into_view(article)
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        viewer: Option<UserId>,
    ) -> DomainResult<ArticlePage> {
        let (limit, offset) = (filter.limit, filter.offset);
        self.page(Scope::Filter(&filter), viewer, limit, offset).await
    }

    async fn feed(&self, viewer: UserId, limit: i64, offset: i64) -> DomainResult<ArticlePage> {
        self.page(Scope::FeedOf(viewer), Some(viewer), limit, offset)
            .await
    }
}
