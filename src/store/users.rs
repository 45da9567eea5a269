use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use tracing::debug;

use super::UsersRepository;
use crate::error::StoreResult;
use crate::models::User;

const INSERT_USER: &str = r#"
    INSERT INTO users (username, email, password)
    VALUES ($1, $2, $3)
    RETURNING id, created_at
"#;

/// PostgreSQL implementation of [`UsersRepository`].
#[derive(Clone)]
pub struct UsersStore {
    pool: Pool,
}

impl UsersStore {
    pub fn new(pool: Pool) -> Self {
        UsersStore { pool }
    }
}

#[async_trait]
impl UsersRepository for UsersStore {
    async fn create(&self, user: &mut User) -> StoreResult<()> {
        let client = self.pool.get().await?;
        let statement = client.prepare_cached(INSERT_USER).await?;

        let password = user.password.as_str();
        let row = client
            .query_one(&statement, &[&user.username, &user.email, &password])
            .await?;

        let id: i64 = row.try_get(0)?;
        let created_at: DateTime<Utc> = row.try_get(1)?;

        user.id = Some(id);
        user.created_at = Some(created_at);

        debug!("Created user with id: {}", id);
        Ok(())
    }
}
