//! User entity - a directory account referenced by membership records

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity owned by the user directory
///
/// Membership records only ever reference `id`; the email is the subject
/// identifier recovered from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, email: String) -> Self {
        Self {
            id,
            email,
            created_at: Utc::now(),
        }
    }
}
