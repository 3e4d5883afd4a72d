// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, CommentView, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Profile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "c.id, c.article_id, c.author_id, c.body, c.created_at, c.updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentViewRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
    following: bool,
}

impl TryFrom<CommentViewRow> for CommentView {
    type Error = DomainError;

    fn try_from(row: CommentViewRow) -> Result<Self, Self::Error> {
        Ok(CommentView {
            comment: Comment::try_from(row.comment)?,
            author: Profile {
                username: Username::from_stored(row.author_username)?,
                bio: row.author_bio,
                image: row.author_image,
                following: row.following,
            },
        })
    }
}

fn view_query(condition: &str) -> String {
    format!(
        "SELECT {COMMENT_COLUMNS},
                u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                EXISTS (SELECT 1 FROM follows f WHERE f.follower_id = $2 AND f.followee_id = u.id) AS following
         FROM comments c JOIN users u ON u.id = c.author_id
         WHERE {condition}
         ORDER BY c.created_at ASC, c.id ASC"
    )
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let sql = format!(
            "INSERT INTO comments AS c (article_id, author_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(comment.article_id))
            .bind(i64::from(comment.author_id))
            .bind(&comment.body)
            .bind(comment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn view(&self, comment: Comment, viewer: Option<UserId>) -> DomainResult<CommentView> {
        let row = sqlx::query_as::<_, CommentViewRow>(&view_query("c.id = $1"))
            .bind(i64::from(comment.id))
            .bind(viewer.map(i64::from))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        CommentView::try_from(row)
    }

    async fn list_for_article(
        &self,
        article: ArticleId,
        viewer: Option<UserId>,
    ) -> DomainResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentViewRow>(&view_query("c.article_id = $1"))
            .bind(i64::from(article))
            .bind(viewer.map(i64::from))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(CommentView::try_from).collect()
    }
}
