pub mod entity;
pub mod input;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, ArticleFilter, ArticlePage, ArticleView, NewArticle};
pub use input::{CreateArticle, UpdateArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, TagRepository};
pub use services::{RandomSlugGenerator, SlugGenerator, SuffixSource, UniquenessOracle};
pub use value_objects::{ArticleId, Slug};
