//! # community-store
//!
//! In-memory implementations of the storage capabilities defined in
//! `community-core`.
//!
//! ## Overview
//!
//! This crate provides the reference implementations for:
//!
//! - [`MemoryMembershipStore`]: keyed storage of community records with
//!   atomic per-key read-modify-write
//! - [`MemoryUserDirectory`]: subject-to-account resolution
//!
//! Both are backed by `DashMap`, whose per-entry locking supplies the
//! per-key atomicity the `MembershipStore` contract requires without
//! serializing operations on unrelated keys.

pub mod directory;
pub mod membership;

// Re-export commonly used types
pub use directory::MemoryUserDirectory;
pub use membership::MemoryMembershipStore;
