//! Declarative permission definitions (serde).

use serde::{Deserialize, Serialize};

use warden_core::{PermissionsError, PermissionsResult};

use crate::configurator::PermissionsConfigurator;
use crate::grant::Grant;
use crate::manager::PermissionsManager;
use crate::resource::Resource;
use crate::role::Role;

/// A complete set of declarations, e.g. loaded from a JSON document.
///
/// ```json
/// {
///   "roles": [{ "name": "editor" }, { "name": "admin", "parents": ["editor"] }],
///   "resources": [{ "name": "article", "actions": ["create", "read"] }],
///   "grants": [{ "role": "editor", "resource": "article", "actions": ["read"] }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsDefinition {
    pub roles: Vec<Role>,
    pub resources: Vec<Resource>,
    pub grants: Vec<Grant>,
}

impl PermissionsDefinition {
    pub fn from_json_str(json: &str) -> PermissionsResult<Self> {
        serde_json::from_str(json).map_err(|e| PermissionsError::definition(e.to_string()))
    }

    pub fn from_json_value(value: serde_json::Value) -> PermissionsResult<Self> {
        serde_json::from_value(value).map_err(|e| PermissionsError::definition(e.to_string()))
    }

    pub fn to_json_string(&self) -> PermissionsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PermissionsError::definition(e.to_string()))
    }
}

impl PermissionsConfigurator for PermissionsDefinition {
    fn configure(&self, manager: &mut PermissionsManager) -> PermissionsResult<()> {
        manager
            .add_roles(self.roles.iter().cloned())
            .add_resources(self.resources.iter().cloned())
            .add_grants(self.grants.iter().cloned());
        Ok(())
    }
}
