//! Administrative roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a dashboard administrator.
///
/// `SuperAdmin` can approve or reject initiator actions; `AdminInitiator`
/// originates them (disbursements, transfers) but cannot self-approve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    AdminInitiator,
}

impl Role {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::AdminInitiator => "admin_initiator",
        }
    }

    /// Whether this role may approve or reject initiator actions.
    pub fn can_approve(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
