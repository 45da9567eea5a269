// Library root for the forum API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use error::{PersistenceError, StoreError, StoreResult};
pub use models::{Password, Post, User};
pub use store::{PostsRepository, Storage, UsersRepository};
