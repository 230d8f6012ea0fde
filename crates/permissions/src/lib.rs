//! `warden-permissions` — role-based authorization compiled into a flat index.
//!
//! Register roles (with optional parents), resources (with their actions) and
//! grants on a [`PermissionsManager`], call [`PermissionsManager::compile`]
//! once, then answer [`PermissionsManager::can`] queries with plain lookups.
//!
//! This crate performs no IO and keeps no global state.

pub mod compiler;
pub mod configurator;
pub mod definition;
pub mod explain;
pub mod grant;
pub mod graph;
pub mod index;
pub mod manager;
pub mod query;
pub mod registry;
pub mod resource;
pub mod role;

pub use configurator::PermissionsConfigurator;
pub use definition::PermissionsDefinition;
pub use explain::{Decision, DecisionReason};
pub use grant::{Grant, GrantSet};
pub use graph::RoleGraph;
pub use index::{AuthorizationIndex, RolePermissions};
pub use manager::PermissionsManager;
pub use query::{PermissionAware, can_all};
pub use registry::{Registry, ResourceRegistry};
pub use resource::Resource;
pub use role::Role;

pub use warden_core::{Action, PermissionsError, PermissionsResult, ResourceName, RoleName};
