//! # society-service
//!
//! Business logic service layer for Society Hub. Each service orchestrates
//! repositories, storage, and authentication to implement one area of the
//! application.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every mutating method takes
//! a [`RequestContext`] and checks the capability policy before touching
//! a record.

pub mod auth;
pub mod booking;
pub mod chat;
pub mod context;
pub mod lostfound;
pub mod maintenance;
pub mod notice;
pub mod poll;
pub mod provision;
pub mod report;
pub mod resident;

pub use auth::AuthService;
pub use booking::BookingService;
pub use chat::ChatService;
pub use context::RequestContext;
pub use lostfound::LostFoundService;
pub use maintenance::MaintenanceService;
pub use notice::NoticeService;
pub use poll::PollService;
pub use report::ReportService;
pub use resident::ResidentService;
