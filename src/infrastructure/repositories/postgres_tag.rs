use super::map_sqlx;
use crate::domain::article::TagRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    /// Only tags still attached to at least one article are listed.
    async fn list(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT t.name FROM tags t
             JOIN article_tags at ON at.tag_id = t.id
             ORDER BY t.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
