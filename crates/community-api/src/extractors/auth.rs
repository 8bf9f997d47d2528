//! Authentication extractor
//!
//! Hands the raw Authorization header value to the access gate. The
//! extractor does no scheme parsing itself; the gate owns the whole
//! header-to-identity contract so the transport stays a thin dispatcher.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use community_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the request credential
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal user ID from the directory
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let app_state = AppState::from_ref(state);
        let user_id = app_state
            .access_gate()
            .resolve_identity(raw_header)
            .await
            .map_err(ApiError::Access)?;

        Ok(AuthUser::new(user_id))
    }
}
