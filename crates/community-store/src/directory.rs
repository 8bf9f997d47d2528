//! In-memory implementation of UserDirectory

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use community_core::entities::User;
use community_core::traits::{StoreResult, UserDirectory};
use community_core::value_objects::Snowflake;

/// In-memory implementation of UserDirectory
///
/// Keeps a subject index next to the primary id map so credential
/// resolution does not scan.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    by_id: DashMap<Snowflake, User>,
    by_subject: DashMap<String, Snowflake>,
}

impl MemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            by_id: DashMap::new(),
            by_subject: DashMap::new(),
        }
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the directory holds no users
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    #[instrument(skip(self, subject))]
    async fn find_by_subject(&self, subject: &str) -> StoreResult<Option<User>> {
        let id = match self.by_subject.get(subject) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.by_id.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> StoreResult<Option<User>> {
        Ok(self.by_id.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: &User) -> StoreResult<()> {
        self.by_subject.insert(user.email.clone(), user.id);
        self.by_id.insert(user.id, user.clone());
        Ok(())
    }
}
