use async_trait::async_trait;

use crate::error::Result;
use crate::user::{NewUser, User};

/// User persistence injected into callers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Stores a new user under the next free id. Fails with
    /// [`StoreError::EmailTaken`](crate::StoreError::EmailTaken) when the
    /// email is already registered.
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Replaces the stored record with the same id.
    async fn update(&self, user: User) -> Result<User>;
}
