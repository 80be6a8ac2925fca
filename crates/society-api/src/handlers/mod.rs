//! HTTP request handlers, one module per route group.

pub mod auth;
pub mod booking;
pub mod chat;
pub mod health;
pub mod lostfound;
pub mod maintenance;
pub mod notice;
pub mod poll;
pub mod report;
pub mod resident;
