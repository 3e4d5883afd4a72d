pub mod articles;
pub mod tags;
pub mod users;
