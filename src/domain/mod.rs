// src/domain/mod.rs
pub mod article;
pub mod comment;
pub mod errors;
pub mod user;
pub mod validation;
