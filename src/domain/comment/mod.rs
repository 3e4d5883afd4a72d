// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId, CommentView, NewComment};
pub use repository::CommentRepository;
