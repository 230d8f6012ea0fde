//! Error model for registration, compilation and queries.

use thiserror::Error;

use crate::name::{Action, ResourceName, RoleName};

/// Result type used across the permissions crates.
pub type PermissionsResult<T> = Result<T, PermissionsError>;

/// Permissions error.
///
/// Compile-time variants describe setup mistakes and are fatal to the
/// `compile()` call that raised them. `NotCompiled` is a programmer error and
/// is never degraded to a negative answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermissionsError {
    /// A role name was empty or blank.
    #[error("invalid role name \"{0}\"")]
    InvalidRoleName(String),

    /// A grant references a role that is not registered.
    #[error("no \"{0}\" role is registered")]
    UnknownRole(RoleName),

    /// A grant references a resource that is not registered.
    #[error("no \"{0}\" resource is registered")]
    UnknownResource(ResourceName),

    /// A grant names actions the resource does not declare.
    #[error(
        "some actions (\"{}\") were not found on resource \"{resource}\"",
        join(.actions, "\", \"")
    )]
    InvalidAction {
        resource: ResourceName,
        actions: Vec<Action>,
    },

    /// Role inheritance forms a cycle. `path` starts and ends with the same role.
    #[error("cyclic role inheritance: {}", join(.path, " -> "))]
    CycleDetected { path: Vec<RoleName> },

    #[error("permissions already compiled")]
    AlreadyCompiled,

    #[error("permissions must be compiled first")]
    NotCompiled,

    /// A declarative definition document could not be read.
    #[error("invalid permissions definition: {0}")]
    Definition(String),
}

impl PermissionsError {
    pub fn invalid_role_name(name: impl Into<String>) -> Self {
        Self::InvalidRoleName(name.into())
    }

    pub fn definition(msg: impl Into<String>) -> Self {
        Self::Definition(msg.into())
    }

    /// True for errors raised by `compile()` that the caller can fix by
    /// registering more definitions and compiling again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownRole(_)
                | Self::UnknownResource(_)
                | Self::InvalidAction { .. }
                | Self::CycleDetected { .. }
        )
    }
}

fn join<T: core::fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
