//! Capability policy applied before every mutation.
//!
//! Authorization in Society Hub reduces to three predicates over
//! `(requester id, requester role, resource owner id)`: is-self, is-admin,
//! and is-self-or-admin. Routes consult these through one checker instead
//! of inlining role/owner comparisons, and combine the result with the
//! entity's status-transition table — passing the capability check alone
//! is necessary but not sufficient for a transition.
//!
//! All functions here are pure; callers map a denial to a `Forbidden`
//! response. State errors (wrong source status) are raised elsewhere as
//! `Conflict`.

use uuid::Uuid;

use society_core::error::AppError;
use society_entity::user::UserRole;

/// The capability under which an access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    /// Granted because the requester owns the resource (or is the subject).
    Owner,
    /// Granted through the admin override.
    Admin,
}

/// Whether the requester is the resource owner.
pub fn is_self(requester_id: Uuid, owner_id: Uuid) -> bool {
    requester_id == owner_id
}

/// Whether the requester's role carries the admin override.
pub fn is_admin(role: UserRole) -> bool {
    role.is_admin()
}

/// Whether the requester is the owner or an admin.
pub fn is_self_or_admin(requester_id: Uuid, role: UserRole, owner_id: Uuid) -> bool {
    is_self(requester_id, owner_id) || is_admin(role)
}

/// Requires the admin capability.
pub fn require_admin(role: UserRole) -> Result<AccessGrant, AppError> {
    if is_admin(role) {
        Ok(AccessGrant::Admin)
    } else {
        Err(AppError::forbidden("Administrator privileges required"))
    }
}

/// Requires ownership of the resource or the admin capability, reporting
/// which one granted the access.
pub fn check_owner_or_admin(
    requester_id: Uuid,
    role: UserRole,
    owner_id: Uuid,
) -> Result<AccessGrant, AppError> {
    if is_self(requester_id, owner_id) {
        Ok(AccessGrant::Owner)
    } else if is_admin(role) {
        Ok(AccessGrant::Admin)
    } else {
        Err(AppError::forbidden(
            "Not authorized to act on this resource",
        ))
    }
}
