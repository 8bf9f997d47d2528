//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with structural rules
//! also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

/// Create community request
///
/// Name length is checked structurally here; the service additionally
/// rejects whitespace-only names. The description may be empty and defaults
/// to empty when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Community name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
}

/// Update community request
///
/// A full overwrite of name and description, matching the write contract of
/// the update operation; no minimum length is imposed here because the
/// baseline update contract does not validate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommunityRequest {
    #[validate(length(max = 100, message = "Community name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
}
