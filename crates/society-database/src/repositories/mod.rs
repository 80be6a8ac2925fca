//! Concrete repository implementations, one per aggregate.

pub mod booking;
pub mod chat;
pub mod lostfound;
pub mod maintenance;
pub mod notice;
pub mod poll;
pub mod user;

pub use booking::BookingRepository;
pub use chat::ChatRepository;
pub use lostfound::LostFoundRepository;
pub use maintenance::MaintenanceRepository;
pub use notice::NoticeRepository;
pub use poll::PollRepository;
pub use user::UserRepository;
