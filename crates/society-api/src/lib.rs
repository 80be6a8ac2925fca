//! # society-api
//!
//! HTTP API layer for Society Hub built on Axum.
//!
//! Provides all REST endpoints, the authentication extractor, DTOs,
//! static serving of uploaded images, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
