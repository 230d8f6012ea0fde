use serde::{Deserialize, Serialize};

use warden_core::{Action, Entity, ResourceName};

/// Canonical CRUD action names used by [`Resource::crud`].
pub const CREATE: &str = "create";
pub const READ: &str = "read";
pub const UPDATE: &str = "update";
pub const DELETE: &str = "delete";

/// A named resource and the closed set of actions it supports.
///
/// The action list is deduplicated on construction (first occurrence keeps its
/// position) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResourceRecord")]
pub struct Resource {
    name: ResourceName,
    actions: Vec<Action>,
}

#[derive(Deserialize)]
struct ResourceRecord {
    name: ResourceName,
    #[serde(default)]
    actions: Vec<Action>,
}

impl From<ResourceRecord> for Resource {
    fn from(value: ResourceRecord) -> Self {
        Resource::new(value.name, value.actions)
    }
}

impl Resource {
    pub fn new<A>(name: impl Into<ResourceName>, actions: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Action>,
    {
        let mut unique: Vec<Action> = Vec::new();
        for action in actions.into_iter().map(Into::into) {
            if !unique.contains(&action) {
                unique.push(action);
            }
        }

        Self {
            name: name.into(),
            actions: unique,
        }
    }

    /// Resource exposing `create`, `read`, `update` and `delete`.
    pub fn crud(name: impl Into<ResourceName>) -> Self {
        Self::new(name, [CREATE, READ, UPDATE, DELETE])
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn supports(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a.as_str() == action)
    }
}

impl Entity for Resource {
    type Id = ResourceName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crud_declares_four_actions() {
        let res = Resource::crud("article");
        let actions: Vec<&str> = res.actions().iter().map(Action::as_str).collect();
        assert_eq!(actions, ["create", "read", "update", "delete"]);
        assert!(res.supports("read"));
        assert!(!res.supports("publish"));
    }

    #[test]
    fn drops_duplicate_actions() {
        let res = Resource::new("report", ["export", "view", "export"]);
        assert_eq!(res.actions(), &[Action::from("export"), Action::from("view")]);
    }

    #[test]
    fn deserialization_dedups_and_defaults() {
        let res: Resource =
            serde_json::from_str(r#"{"name":"report","actions":["view","view"]}"#).unwrap();
        assert_eq!(res.actions().len(), 1);

        let bare: Resource = serde_json::from_str(r#"{"name":"ping"}"#).unwrap();
        assert!(bare.actions().is_empty());
    }
}
