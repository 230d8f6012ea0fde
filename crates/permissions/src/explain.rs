//! Explanations of individual authorization decisions (audit trail).

use serde::Serialize;

use warden_core::{Action, ResourceName, RoleName};

use crate::index::AuthorizationIndex;

/// Why a query was answered the way it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub role: RoleName,
    pub action: Action,
    pub resource: ResourceName,
    pub granted: bool,
    pub reason: DecisionReason,
    /// Roles whose grants produced the permission, empty when denied.
    pub granted_by: Vec<RoleName>,
    /// Human-readable summary.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// The role itself holds a matching grant.
    Direct,
    /// Only ancestors of the role hold matching grants.
    Inherited,
    /// The role was not registered at compile time.
    UnknownRole,
    /// The role is known but nothing grants this action.
    NotGranted,
}

/// Explain `can(role, action, resource)` against a compiled index.
pub fn explain(index: &AuthorizationIndex, role: &str, action: &str, resource: &str) -> Decision {
    let granted_by: Vec<RoleName> = index
        .granted_by(role, action, resource)
        .map(|sources| sources.iter().cloned().collect())
        .unwrap_or_default();

    let (reason, message) = if !index.has_role(role) {
        (
            DecisionReason::UnknownRole,
            format!("role '{role}' is not registered"),
        )
    } else if granted_by.is_empty() {
        (
            DecisionReason::NotGranted,
            format!("role '{role}' has no grant for '{action}' on '{resource}'"),
        )
    } else if granted_by.iter().any(|source| source.as_str() == role) {
        (
            DecisionReason::Direct,
            format!("role '{role}' is granted '{action}' on '{resource}'"),
        )
    } else {
        let via = granted_by
            .iter()
            .map(RoleName::as_str)
            .collect::<Vec<_>>()
            .join("', '");
        (
            DecisionReason::Inherited,
            format!("role '{role}' inherits '{action}' on '{resource}' from '{via}'"),
        )
    };

    Decision {
        role: RoleName::new(role.to_string()),
        action: Action::new(action.to_string()),
        resource: ResourceName::new(resource.to_string()),
        granted: !granted_by.is_empty(),
        reason,
        granted_by,
        message,
    }
}
