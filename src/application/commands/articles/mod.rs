mod comments;
mod create;
mod delete;
mod favorite;
mod ownership;
mod service;
mod slug;
mod update;

pub use comments::{AddCommentCommand, DeleteCommentCommand};
pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use slug::SlugAvailability;
pub use update::UpdateArticleCommand;
