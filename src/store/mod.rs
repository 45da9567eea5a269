//! Data-access layer: one repository per entity, composed into [`Storage`].
//!
//! Callers only see the capability traits below, so the PostgreSQL stores can
//! be swapped for anything else (an in-memory fake in tests, for instance)
//! without touching caller code.

pub mod posts;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use deadpool_postgres::Pool;

use crate::error::StoreResult;
use crate::models::{Post, User};

pub use posts::PostsStore;
pub use users::UsersStore;

/// Persistence operations available for posts.
#[async_trait]
pub trait PostsRepository: Send + Sync {
    /// Inserts `post` and fills in its `id`, `created_at` and `updated_at`.
    ///
    /// On error the generated fields are left as they were.
    async fn create(&self, post: &mut Post) -> StoreResult<()>;
}

/// Persistence operations available for users.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Inserts `user` and fills in its `id` and `created_at`.
    ///
    /// On error the generated fields are left as they were.
    async fn create(&self, user: &mut User) -> StoreResult<()>;
}

/// Composition root for every repository, built once at startup.
#[derive(Clone)]
pub struct Storage {
    pub posts: Arc<dyn PostsRepository>,
    pub users: Arc<dyn UsersRepository>,
}

impl Storage {
    /// Wires the PostgreSQL-backed repositories onto a shared pool.
    pub fn new(pool: Pool) -> Self {
        Storage {
            posts: Arc::new(PostsStore::new(pool.clone())),
            users: Arc::new(UsersStore::new(pool)),
        }
    }

    pub fn from_repositories(
        posts: Arc<dyn PostsRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Storage { posts, users }
    }
}
