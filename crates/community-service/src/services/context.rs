//! Service context - dependency container for services
//!
//! Holds the storage capabilities, identity resolution, and id generation
//! needed by the service layer.

use std::sync::Arc;

use community_core::traits::{MembershipStore, TokenVerifier, UserDirectory};
use community_core::{Snowflake, SnowflakeGenerator};

use super::access::AccessGate;

/// Service context containing all dependencies
///
/// Provides access to:
/// - The membership store
/// - The user directory and token verifier (composed into the access gate)
/// - The snowflake generator for id allocation
#[derive(Clone)]
pub struct ServiceContext {
    membership_store: Arc<dyn MembershipStore>,
    user_directory: Arc<dyn UserDirectory>,
    access_gate: AccessGate,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        membership_store: Arc<dyn MembershipStore>,
        user_directory: Arc<dyn UserDirectory>,
        token_verifier: Arc<dyn TokenVerifier>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        let access_gate = AccessGate::new(token_verifier, Arc::clone(&user_directory));
        Self {
            membership_store,
            user_directory,
            access_gate,
            snowflake_generator,
        }
    }

    /// Get the membership store
    pub fn membership_store(&self) -> &dyn MembershipStore {
        self.membership_store.as_ref()
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the access gate
    pub fn access_gate(&self) -> &AccessGate {
        &self.access_gate
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("membership_store", &"dyn MembershipStore")
            .field("user_directory", &"dyn UserDirectory")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    membership_store: Option<Arc<dyn MembershipStore>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
    token_verifier: Option<Arc<dyn TokenVerifier>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn membership_store(mut self, store: Arc<dyn MembershipStore>) -> Self {
        self.membership_store = Some(store);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    pub fn token_verifier(mut self, verifier: Arc<dyn TokenVerifier>) -> Self {
        self.token_verifier = Some(verifier);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.membership_store
                .ok_or_else(|| ServiceError::validation("membership_store is required"))?,
            self.user_directory
                .ok_or_else(|| ServiceError::validation("user_directory is required"))?,
            self.token_verifier
                .ok_or_else(|| ServiceError::validation("token_verifier is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
