//! Lost-and-found entity: model, item type, and status machine.

pub mod model;
pub mod status;

pub use model::{CreateLostFoundItem, LostFoundItem, LostFoundItemWithUser};
pub use status::{LostFoundStatus, LostFoundType};
