// src/domain/article/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::article::value_objects::Slug;
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const SLUG_SEPARATOR: char = '_';
/// Base used when a title has no letters or digits left after normalization.
const FALLBACK_BASE: &str = "article";

/// Lowercase ASCII words joined by [`SLUG_SEPARATOR`], diacritics stripped.
pub fn normalize(title: &str) -> String {
    let base = slug::slugify(title).replace('-', &SLUG_SEPARATOR.to_string());
    if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base
    }
}

/// Answers whether a candidate slug is still free. Usually backed by storage.
#[async_trait]
pub trait UniquenessOracle: Send + Sync {
    async fn is_unique(&self, candidate: &Slug) -> DomainResult<bool>;
}

/// Source of the numeric suffix appended after a collision.
pub trait SuffixSource: Send + Sync {
    /// A value in `[2, 255)`.
    fn next_suffix(&self) -> u32;
}

#[async_trait]
pub trait SlugGenerator: Send + Sync {
    async fn generate_slug(
        &self,
        title: &str,
        verify_unique: &dyn UniquenessOracle,
    ) -> DomainResult<Slug>;
}

/// Tries the bare normalized title first, then `<base>_<n>` with a random
/// `n`, consulting the oracle at most `max_attempts` times in total.
pub struct RandomSlugGenerator {
    suffixes: Arc<dyn SuffixSource>,
    max_attempts: u32,
}

impl RandomSlugGenerator {
    pub fn new(suffixes: Arc<dyn SuffixSource>, max_attempts: u32) -> Self {
        Self {
            suffixes,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn with_default_attempts(suffixes: Arc<dyn SuffixSource>) -> Self {
        Self::new(suffixes, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn candidate(&self, base: &str, attempt: u32) -> Slug {
        if attempt == 0 {
            Slug::from_normalized(base.to_string())
        } else {
            let suffix = self.suffixes.next_suffix();
            Slug::from_normalized(format!("{base}{SLUG_SEPARATOR}{suffix}"))
        }
    }
}

#[async_trait]
impl SlugGenerator for RandomSlugGenerator {
    async fn generate_slug(
        &self,
        title: &str,
        verify_unique: &dyn UniquenessOracle,
    ) -> DomainResult<Slug> {
        let base = normalize(title);
        for attempt in 0..self.max_attempts {
            let candidate = self.candidate(&base, attempt);
            if verify_unique.is_unique(&candidate).await? {
                tracing::debug!(slug = %candidate, attempt, "slug generated");
                return Ok(candidate);
            }
        }

        tracing::warn!(title, attempts = self.max_attempts, "slug retry budget exhausted");
        Err(DomainError::CannotGenerateSlug {
            title: title.to_string(),
        })
    }
}
