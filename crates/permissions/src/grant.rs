use serde::{Deserialize, Serialize};

use warden_core::{Action, ResourceName, RoleName};

/// Declaration that a role may perform some of a resource's actions.
///
/// An empty action list stands for every action the resource declares. Nothing
/// is checked until compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    role: RoleName,
    resource: ResourceName,
    #[serde(default)]
    actions: Vec<Action>,
}

impl Grant {
    pub fn new<A>(role: impl Into<RoleName>, resource: impl Into<ResourceName>, actions: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Action>,
    {
        Self {
            role: role.into(),
            resource: resource.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// Grant every action the resource declares.
    pub fn all(role: impl Into<RoleName>, resource: impl Into<ResourceName>) -> Self {
        Self::new(role, resource, core::iter::empty::<Action>())
    }

    pub fn role(&self) -> &RoleName {
        &self.role
    }

    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Grants pending compilation, in registration order.
#[derive(Debug, Clone, Default)]
pub struct GrantSet {
    grants: Vec<Grant>,
}

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_grant(&mut self, grant: Grant) {
        self.grants.push(grant);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
