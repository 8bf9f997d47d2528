//! Capability traits - ports consumed by the application layer

mod capabilities;

pub use capabilities::{
    CommunityMutator, MembershipStore, StoreResult, TokenVerifier, UserDirectory,
};
