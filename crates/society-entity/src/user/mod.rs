//! User entity: model and role enum.

pub mod model;
pub mod role;

pub use model::{CreateUser, UpdateProfile, User};
pub use role::UserRole;
