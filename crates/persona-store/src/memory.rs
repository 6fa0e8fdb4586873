use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::traits::UserStore;
use crate::user::{email_key, NewUser, User};

#[derive(Debug, Default)]
struct Users {
    by_id: HashMap<u64, User>,
    next_id: u64,
}

impl Users {
    fn id_for_email(&self, email: &str) -> Option<u64> {
        let key = email_key(email);
        self.by_id
            .values()
            .find(|user| email_key(&user.email) == key)
            .map(|user| user.id)
    }
}

/// Process-local store. Clones share the same users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Users>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; later inserts continue after the highest seeded id.
    /// Ids and emails (case-insensitively) must be unique across the seed.
    pub fn with_users(seed: Vec<User>) -> Result<Self> {
        let mut users = Users::default();
        for user in seed {
            if users.by_id.contains_key(&user.id) {
                return Err(StoreError::DuplicateId(user.id));
            }
            if users.id_for_email(&user.email).is_some() {
                return Err(StoreError::EmailTaken(user.email));
            }
            users.next_id = users.next_id.max(user.id);
            users.by_id.insert(user.id, user);
        }
        Ok(Self {
            users: Arc::new(RwLock::new(users)),
        })
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .id_for_email(email)
            .and_then(|id| users.by_id.get(&id).cloned()))
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        if users.id_for_email(&user.email).is_some() {
            tracing::info!(target: "persona_store", email = %user.email, "sign-up rejected: email in use");
            return Err(StoreError::EmailTaken(user.email));
        }

        users.next_id += 1;
        let user = user.into_user(users.next_id);
        users.by_id.insert(user.id, user.clone());
        tracing::info!(target: "persona_store", id = user.id, "user inserted");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        if !users.by_id.contains_key(&user.id) {
            return Err(StoreError::NotFound(user.id));
        }
        if let Some(owner) = users.id_for_email(&user.email) {
            if owner != user.id {
                return Err(StoreError::EmailTaken(user.email));
            }
        }

        users.by_id.insert(user.id, user.clone());
        tracing::debug!(target: "persona_store", id = user.id, "user updated");
        Ok(user)
    }
}
