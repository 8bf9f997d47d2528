//! # community-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CommunityResponse, CreateCommunityRequest, HealthResponse, ReadinessResponse,
    UpdateCommunityRequest,
};
pub use services::{
    AccessError, AccessGate, CommunityService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
