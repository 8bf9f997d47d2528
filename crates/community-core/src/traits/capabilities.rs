//! Capability traits (ports) - define the interfaces the service layer needs
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Token verification and directory lookups may
//! involve I/O, so every operation is async; none of them touch membership
//! state.

use async_trait::async_trait;

use crate::entities::{Community, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for capability operations
pub type StoreResult<T> = Result<T, DomainError>;

// ============================================================================
// Token Verifier
// ============================================================================

/// Validates an opaque bearer token and extracts the stable subject
/// identifier (an email). No membership knowledge.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a token and return its subject, or fail if the token is
    /// expired, malformed, or carries a bad signature.
    async fn verify(&self, token: &str) -> StoreResult<String>;
}

// ============================================================================
// User Directory
// ============================================================================

/// Maps subject identifiers to internal user records. No membership
/// knowledge.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by subject identifier (email)
    async fn find_by_subject(&self, subject: &str) -> StoreResult<Option<User>>;

    /// Find a user by internal ID
    async fn find_by_id(&self, id: Snowflake) -> StoreResult<Option<User>>;

    /// Register a user record
    async fn insert(&self, user: &User) -> StoreResult<()>;
}

// ============================================================================
// Membership Store
// ============================================================================

/// Mutation applied to a community record under its per-key lock
pub type CommunityMutator = Box<dyn FnOnce(&mut Community) + Send>;

/// Durable keyed storage of Community records
///
/// `update_with` is the atomic read-modify-write primitive that makes
/// join/leave race-free: the mutator observes and edits the record while the
/// key is held exclusively, so two concurrent roster edits on the same id
/// always compose instead of one overwriting the other. Operations on
/// different ids must not contend.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Insert a new community record
    async fn create(&self, community: &Community) -> StoreResult<()>;

    /// Find a community by ID
    async fn find_by_id(&self, id: Snowflake) -> StoreResult<Option<Community>>;

    /// Snapshot of every stored community
    async fn find_all(&self) -> StoreResult<Vec<Community>>;

    /// Every community whose roster currently contains the user
    async fn find_by_member(&self, user_id: Snowflake) -> StoreResult<Vec<Community>>;

    /// Atomically read-modify-write the record for `id`
    ///
    /// Returns the updated record, or `None` if no community has that id
    /// (the mutator is not called in that case).
    async fn update_with(
        &self,
        id: Snowflake,
        mutate: CommunityMutator,
    ) -> StoreResult<Option<Community>>;

    /// Hard-delete a community; returns whether a record was removed
    async fn delete(&self, id: Snowflake) -> StoreResult<bool>;
}
