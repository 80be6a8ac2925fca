//! Facility booking entity: model and status machine.

pub mod model;
pub mod status;

pub use model::{Booking, BookingWithUser, CreateBooking};
pub use status::BookingStatus;
