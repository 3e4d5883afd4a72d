use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserChanges},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `EmailAlreadyExists` or `UsernameAlreadyExists` on duplicates.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn update(&self, changes: UserChanges) -> DomainResult<User>;

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool>;
}
