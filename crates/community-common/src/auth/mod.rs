//! Token verification utilities

mod jwt;

pub use jwt::{Claims, JwtVerifier};
