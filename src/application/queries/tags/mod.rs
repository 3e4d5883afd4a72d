use std::sync::Arc;

use crate::{application::error::ApplicationResult, domain::article::TagRepository};

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.tag_repo.list().await?)
    }
}
