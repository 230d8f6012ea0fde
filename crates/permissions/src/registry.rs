//! Name-keyed registries for roles and resources.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use warden_core::{Action, Entity};

use crate::resource::Resource;

/// Entities keyed by id, iterated in id order.
///
/// Registering an entity whose id is already present replaces the previous
/// one; parent lists and action sets are never merged.
#[derive(Debug, Clone)]
pub struct Registry<T: Entity> {
    entries: BTreeMap<T::Id, T>,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, returning the one it replaced (if any).
    pub fn insert(&mut self, entity: T) -> Option<T> {
        self.entries.insert(entity.id().clone(), entity)
    }

    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(id)
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registered resources and the actions each one declares.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    resources: Registry<Resource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource. A resource with the same name is replaced.
    pub fn add_resource(&mut self, resource: Resource) {
        if let Some(previous) = self.resources.insert(resource) {
            tracing::debug!(resource = %previous.name(), "replaced previously registered resource");
        }
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    /// Declared actions of `name`, or `None` when it is not registered.
    pub fn actions_of(&self, name: &str) -> Option<&[Action]> {
        self.resource(name).map(Resource::actions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_registration_overwrites() {
        let mut registry = ResourceRegistry::new();
        registry.add_resource(Resource::new("report", ["view", "export"]));
        registry.add_resource(Resource::new("report", ["view"]));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.actions_of("report"), Some(&[Action::from("view")][..]));
    }

    #[test]
    fn unknown_resource_has_no_actions() {
        let registry = ResourceRegistry::new();
        assert!(registry.actions_of("report").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn iterates_in_name_order() {
        let mut registry = ResourceRegistry::new();
        registry.add_resource(Resource::crud("zeta"));
        registry.add_resource(Resource::crud("alpha"));

        let names: Vec<&str> = registry.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
