mod comments;
mod feed;
mod get_by_slug;
mod list;
mod service;

pub use comments::ListCommentsQuery;
pub use feed::FeedQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
