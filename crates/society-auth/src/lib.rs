//! # society-auth
//!
//! Authentication and authorization primitives for Society Hub:
//! JWT encoding/decoding, Argon2id password hashing, and the capability
//! policy every mutating endpoint consults before touching a record.

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::hasher::PasswordHasher;
pub use policy::{AccessGrant, check_owner_or_admin, is_admin, is_self, require_admin};
