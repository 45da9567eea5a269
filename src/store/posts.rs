use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use tracing::debug;

use super::PostsRepository;
use crate::error::StoreResult;
use crate::models::Post;

const INSERT_POST: &str = r#"
    INSERT INTO posts (content, title, user_id, tags)
    VALUES ($1, $2, $3, $4)
    RETURNING id, created_at, updated_at
"#;

/// PostgreSQL implementation of [`PostsRepository`].
#[derive(Clone)]
pub struct PostsStore {
    pool: Pool,
}

impl PostsStore {
    pub fn new(pool: Pool) -> Self {
        PostsStore { pool }
    }
}

#[async_trait]
impl PostsRepository for PostsStore {
    async fn create(&self, post: &mut Post) -> StoreResult<()> {
        let client = self.pool.get().await?;
        let statement = client.prepare_cached(INSERT_POST).await?;

        // Vec<String> binds as a native TEXT[] parameter
        let row = client
            .query_one(
                &statement,
                &[&post.content, &post.title, &post.user_id, &post.tags],
            )
            .await?;

        let id: i64 = row.try_get(0)?;
        let created_at: DateTime<Utc> = row.try_get(1)?;
        let updated_at: DateTime<Utc> = row.try_get(2)?;

        post.id = Some(id);
        post.created_at = Some(created_at);
        post.updated_at = Some(updated_at);

        debug!("Created post with id: {}", id);
        Ok(())
    }
}
