//! Ownership Guard for owned resources.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Allow,
    Deny,
}

/// Decides whether an update may touch an owned entity.
pub type OwnershipPolicy = fn(payload_owner: Uuid, stored_owner: Uuid) -> Ownership;

/// Allows the update when the payload names the stored owner.
///
/// The authenticated caller is not consulted: a payload carrying the right
/// owner id passes regardless of who sent it.
pub fn payload_owner_matches(payload_owner: Uuid, stored_owner: Uuid) -> Ownership {
    if payload_owner == stored_owner {
        Ownership::Allow
    } else {
        Ownership::Deny
    }
}
