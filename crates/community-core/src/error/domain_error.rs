//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Community not found: {0}")]
    CommunityNotFound(Snowflake),

    #[error("User not found")]
    UserNotFound,

    // =========================================================================
    // Credential Errors
    // =========================================================================
    /// The verifier could not extract a subject. Expired, malformed, and
    /// badly-signed tokens all collapse into this one kind.
    #[error("Token rejected")]
    TokenRejected,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CommunityNotFound(_) => "UNKNOWN_COMMUNITY",
            Self::UserNotFound => "UNKNOWN_USER",
            Self::TokenRejected => "TOKEN_REJECTED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommunityNotFound(_) | Self::UserNotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
