// tests/support/mocks/mod.rs
//! Test doubles for every port and repository.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;
pub mod util;

pub use security::{PlainPasswordHasher, StubTokenManager, token_for};
pub use store::InMemoryStore;
pub use time::{SteppingClock, fixed_now};
pub use util::SequenceSuffix;
