// Models module

pub mod user;
pub mod post;

// Re-export commonly used types
pub use user::{Password, User};
pub use post::Post;
