#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use forum_api::{
    config::{Config, DbConfig},
    db,
    store::{PostsRepository, Storage, UsersRepository},
    Post, StoreError, StoreResult, User,
};

/// In-memory posts repository that assigns ids from a counter.
#[derive(Default)]
pub struct MemoryPosts {
    next_id: AtomicI64,
    pub saved: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostsRepository for MemoryPosts {
    async fn create(&self, post: &mut Post) -> StoreResult<()> {
        let now = Utc::now();
        post.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        post.created_at = Some(now);
        post.updated_at = Some(now);
        self.saved.lock().unwrap().push(post.clone());
        Ok(())
    }
}

/// In-memory users repository that assigns ids from a counter.
#[derive(Default)]
pub struct MemoryUsers {
    next_id: AtomicI64,
    pub saved: Mutex<Vec<User>>,
}

#[async_trait]
impl UsersRepository for MemoryUsers {
    async fn create(&self, user: &mut User) -> StoreResult<()> {
        user.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        user.created_at = Some(Utc::now());
        self.saved.lock().unwrap().push(user.clone());
        Ok(())
    }
}

/// Repository that always fails, as a closed pool would.
pub struct ClosedPosts;

#[async_trait]
impl PostsRepository for ClosedPosts {
    async fn create(&self, _post: &mut Post) -> StoreResult<()> {
        Err(StoreError::from(deadpool_postgres::PoolError::Closed))
    }
}

pub fn memory_storage() -> (Storage, Arc<MemoryPosts>, Arc<MemoryUsers>) {
    let posts = Arc::new(MemoryPosts::default());
    let users = Arc::new(MemoryUsers::default());
    let storage = Storage::from_repositories(posts.clone(), users.clone());
    (storage, posts, users)
}

pub fn test_config() -> Config {
    Config {
        addr: ":0".to_string(),
        db: DbConfig {
            addr: "postgres://localhost/test?sslmode=disable".to_string(),
            max_open_conns: 4,
            max_idle_conns: 4,
            max_idle_time: "1m".to_string(),
        },
    }
}

// Serialized with an advisory lock because test binaries run concurrently
const SCHEMA: &str = r#"
    BEGIN;
    SELECT pg_advisory_xact_lock(7242);
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(255) UNIQUE NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        password TEXT NOT NULL,
        created_at TIMESTAMP(0) WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    CREATE TABLE IF NOT EXISTS posts (
        id BIGSERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        title TEXT NOT NULL,
        user_id BIGINT NOT NULL REFERENCES users(id),
        created_at TIMESTAMP(0) WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP(0) WITH TIME ZONE NOT NULL DEFAULT NOW(),
        tags TEXT[] NOT NULL DEFAULT '{}'
    );
    COMMIT;
"#;

/// Pool against `TEST_DATABASE_URL` with the forum schema in place,
/// or `None` when no test database is configured.
pub async fn test_pool() -> Option<deadpool_postgres::Pool> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let pool = db::connect(&url, 4, 4, "1m")
        .await
        .expect("test database should be reachable");
    let client = pool.get().await.expect("checkout should succeed");
    client
        .batch_execute(SCHEMA)
        .await
        .expect("schema creation should succeed");

    Some(pool)
}

/// Suffix that keeps unique columns distinct across test runs.
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
