use std::fmt;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Registered forum user.
///
/// `id` and `created_at` come back from the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: String, email: String, password: Password) -> Self {
        User {
            id: None,
            username,
            email,
            password,
            created_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Opaque credential material.
///
/// The store writes it exactly as given. Producing it (hashing, encoding) is
/// the job of whatever authentication component builds the `User`, so the
/// value is never printed and never serialized back out.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(credential: impl Into<String>) -> Self {
        Password(credential.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
