//! JWT claims, encoding, and decoding.

pub mod claims;
pub mod decoder;
pub mod encoder;
