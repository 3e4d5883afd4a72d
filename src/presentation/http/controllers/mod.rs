// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod payloads;
pub mod profiles;
pub mod tags;
pub mod users;
