//! Access gate
//!
//! Composes token verification and directory lookup into a single
//! authenticated-identity resolution. Injected as an explicit capability so
//! the API layer and tests share one resolver instead of each re-deriving
//! identity from headers ad hoc.

use std::sync::Arc;

use community_core::traits::{TokenVerifier, UserDirectory};
use community_core::{DomainError, Snowflake};
use tracing::{instrument, warn};

/// Scheme prefix expected on the credential header
const BEARER_PREFIX: &str = "Bearer ";

/// Identity resolution failures
///
/// `TokenInvalid` and `IdentityNotFound` are kept distinct internally (for
/// logs) but the API boundary surfaces them identically, so a caller cannot
/// probe which one occurred.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// Credential header absent or not carrying the bearer scheme
    #[error("Missing or malformed authorization header")]
    Unauthenticated,

    /// The verifier could not extract a subject from the token
    #[error("Token could not be verified")]
    TokenInvalid,

    /// The subject has no record in the directory
    #[error("No account for token subject")]
    IdentityNotFound,

    /// Directory lookup failed for infrastructure reasons
    #[error("Identity lookup failed: {0}")]
    Internal(#[source] DomainError),
}

impl AccessError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::TokenInvalid | Self::IdentityNotFound => 404,
            Self::Internal(_) => 500,
        }
    }
}

/// Authenticated-identity resolver
///
/// Pure function of its inputs: no side effects on any store, safe to call
/// repeatedly and concurrently.
#[derive(Clone)]
pub struct AccessGate {
    verifier: Arc<dyn TokenVerifier>,
    directory: Arc<dyn UserDirectory>,
}

impl AccessGate {
    /// Create a new AccessGate
    pub fn new(verifier: Arc<dyn TokenVerifier>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            verifier,
            directory,
        }
    }

    /// Resolve a raw credential header value to an internal user id
    ///
    /// The full raw header value goes in (or `None` when the request carried
    /// no credential); scheme checking happens here, not in the transport.
    #[instrument(skip(self, raw_header))]
    pub async fn resolve_identity(
        &self,
        raw_header: Option<&str>,
    ) -> Result<Snowflake, AccessError> {
        let header = raw_header.ok_or(AccessError::Unauthenticated)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AccessError::Unauthenticated)?;

        let subject = self.verifier.verify(token).await.map_err(|e| {
            warn!(error = %e, "Credential verification failed");
            AccessError::TokenInvalid
        })?;

        let user = self
            .directory
            .find_by_subject(&subject)
            .await
            .map_err(AccessError::Internal)?;

        match user {
            Some(user) => Ok(user.id),
            None => {
                warn!("Verified token for a subject with no directory record");
                Err(AccessError::IdentityNotFound)
            }
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}
