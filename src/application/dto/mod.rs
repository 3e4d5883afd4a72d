pub mod articles;
pub mod auth;
pub mod comments;
pub mod users;

pub use articles::{ArticleDto, ArticleListDto};
pub use auth::AuthenticatedUser;
pub use comments::CommentDto;
pub use users::{ProfileDto, UserDto};
