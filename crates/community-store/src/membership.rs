//! In-memory implementation of MembershipStore

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use community_core::entities::Community;
use community_core::traits::{CommunityMutator, MembershipStore, StoreResult};
use community_core::value_objects::Snowflake;

/// In-memory implementation of MembershipStore
///
/// Records are keyed by community id in a `DashMap`. `update_with` runs the
/// mutator while holding the entry's shard write lock, which gives each key
/// the atomic read-modify-write the contract requires: concurrent roster
/// edits on the same id serialize, edits on different ids proceed in
/// parallel. Mutators must therefore stay short and must not block.
#[derive(Debug, Default)]
pub struct MemoryMembershipStore {
    communities: DashMap<Snowflake, Community>,
}

impl MemoryMembershipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            communities: DashMap::new(),
        }
    }

    /// Number of stored communities
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Whether the store holds no communities
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}

#[async_trait]
impl MembershipStore for MemoryMembershipStore {
    #[instrument(skip(self, community), fields(community_id = %community.id))]
    async fn create(&self, community: &Community) -> StoreResult<()> {
        self.communities.insert(community.id, community.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> StoreResult<Option<Community>> {
        Ok(self.communities.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<Community>> {
        Ok(self
            .communities
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, user_id: Snowflake) -> StoreResult<Vec<Community>> {
        Ok(self
            .communities
            .iter()
            .filter(|entry| entry.value().is_member(user_id))
            .map(|entry| entry.value().clone())
            .collect())
    }

    #[instrument(skip(self, mutate))]
    async fn update_with(
        &self,
        id: Snowflake,
        mutate: CommunityMutator,
    ) -> StoreResult<Option<Community>> {
        match self.communities.get_mut(&id) {
            Some(mut entry) => {
                mutate(entry.value_mut());
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> StoreResult<bool> {
        Ok(self.communities.remove(&id).is_some())
    }
}
