use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Errors produced by the data-access layer.
///
/// Nothing here is retried or translated: callers receive the failure as it
/// happened and decide what it means for them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bootstrap input that could not be interpreted (e.g. an idle-time string).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pool setup or the bootstrap liveness probe failed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution, row decoding or connection checkout failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Underlying cause of a [`StoreError::Persistence`].
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Statement(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Pool(#[from] deadpool_postgres::PoolError),
}

impl StoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// SQLSTATE reported by PostgreSQL, if the failure came from the server.
    pub fn sql_state(&self) -> Option<&SqlState> {
        match self {
            StoreError::Persistence(PersistenceError::Statement(err)) => err.code(),
            StoreError::Persistence(PersistenceError::Pool(
                deadpool_postgres::PoolError::Backend(err),
            )) => err.code(),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.sql_state() == Some(&SqlState::UNIQUE_VIOLATION)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.sql_state() == Some(&SqlState::FOREIGN_KEY_VIOLATION)
    }
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        StoreError::Persistence(PersistenceError::Statement(err))
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Persistence(PersistenceError::Pool(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
