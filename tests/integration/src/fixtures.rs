//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Response bodies
//! deserialize straight into the service DTOs.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub use community_service::CommunityResponse;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create community request
#[derive(Debug, Serialize)]
pub struct CreateCommunityBody {
    pub name: String,
    pub description: String,
}

impl CreateCommunityBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("community-{suffix}"),
            description: format!("test community {suffix}"),
        }
    }

    pub fn named(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Update community request
#[derive(Debug, Serialize)]
pub struct UpdateCommunityBody {
    pub name: String,
    pub description: String,
}
