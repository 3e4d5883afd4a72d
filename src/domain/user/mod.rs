// src/domain/user/mod.rs
pub mod entity;
pub mod input;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, Profile, User, UserChanges};
pub use input::{Login, RegisterUser, UpdateUser};
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, UserId, Username};
