//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake IDs
//! are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use community_core::entities::Community;
use serde::{Deserialize, Serialize};

/// Community response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    /// Roster as sorted id strings; the set itself is unordered
    pub members: Vec<String>,
    pub member_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        let mut members: Vec<String> =
            community.members.iter().map(ToString::to_string).collect();
        members.sort_unstable();

        Self {
            id: community.id.to_string(),
            name: community.name.clone(),
            description: community.description.clone(),
            created_by: community.created_by.to_string(),
            member_count: members.len(),
            members,
            created_at: community.created_at,
            updated_at: community.updated_at,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub store: bool,
}

impl ReadinessResponse {
    pub fn ready(store: bool) -> Self {
        Self {
            status: if store { "ready" } else { "degraded" },
            store,
        }
    }
}
