//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, identity resolution, and orchestration of domain operations.

pub mod access;
pub mod community;
pub mod context;
pub mod error;

// Re-export all services for convenience
pub use access::{AccessError, AccessGate};
pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
