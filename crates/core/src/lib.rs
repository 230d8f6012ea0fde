//! `warden-core` — naming and error primitives shared by the permissions engine.
//!
//! This crate is pure: no IO, no global state, no logging.

pub mod entity;
pub mod error;
pub mod name;

pub use entity::Entity;
pub use error::{PermissionsError, PermissionsResult};
pub use name::{Action, ResourceName, RoleName};
