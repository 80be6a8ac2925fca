//! # society-entity
//!
//! Domain entity models for Society Hub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Status enums carry their transition rules with them: each enum exposes
//! the fixed table of transitions the HTTP API permits, so route handlers
//! and services validate state changes in one place instead of re-deriving
//! them per endpoint.

pub mod booking;
pub mod chat;
pub mod lostfound;
pub mod maintenance;
pub mod notice;
pub mod poll;
pub mod user;
