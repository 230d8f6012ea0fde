//! The compiled, immutable authorization index.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use warden_core::{Action, ResourceName, RoleName};

/// Effective permissions of one role: resource -> permitted actions.
pub type RolePermissions = BTreeMap<ResourceName, BTreeSet<Action>>;

/// Per-action provenance: the roles whose grants produced the entry.
type ActionEntries = HashMap<Action, BTreeSet<RoleName>>;

/// Flattened (role, resource, action) triples, inheritance already applied.
///
/// Lookups borrow `&str` keys straight into the nested maps, so a query is a
/// constant number of hash lookups and never allocates.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationIndex {
    roles: HashSet<RoleName>,
    entries: HashMap<RoleName, HashMap<ResourceName, ActionEntries>>,
    len: usize,
}

impl AuthorizationIndex {
    /// Whether `role` was registered when the index was compiled.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Whether `(role, resource, action)` is permitted.
    pub fn contains(&self, role: &str, action: &str, resource: &str) -> bool {
        self.actions(role, resource)
            .is_some_and(|actions| actions.contains_key(action))
    }

    /// Roles whose grants produced `(role, resource, action)`, if permitted.
    pub fn granted_by(&self, role: &str, action: &str, resource: &str) -> Option<&BTreeSet<RoleName>> {
        self.actions(role, resource)?.get(action)
    }

    /// Everything `role` may do, sorted. Empty for unknown roles.
    pub fn permissions_of(&self, role: &str) -> RolePermissions {
        let Some(resources) = self.entries.get(role) else {
            return RolePermissions::new();
        };

        resources
            .iter()
            .map(|(resource, actions)| (resource.clone(), actions.keys().cloned().collect()))
            .collect()
    }

    /// Role names known at compile time.
    pub fn roles(&self) -> impl Iterator<Item = &RoleName> {
        self.roles.iter()
    }

    /// Number of (role, resource, action) triples.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn actions(&self, role: &str, resource: &str) -> Option<&ActionEntries> {
        self.entries.get(role)?.get(resource)
    }
}

/// Mutable staging area; only the compiler builds indexes.
#[derive(Debug, Default)]
pub(crate) struct IndexBuilder {
    index: AuthorizationIndex,
}

impl IndexBuilder {
    pub(crate) fn new(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self {
            index: AuthorizationIndex {
                roles: roles.into_iter().collect(),
                ..AuthorizationIndex::default()
            },
        }
    }

    /// Record that `role` may perform `actions` on `resource` because of a
    /// grant made to `source`.
    pub(crate) fn permit(
        &mut self,
        role: &RoleName,
        source: &RoleName,
        resource: &ResourceName,
        actions: &[Action],
    ) {
        let AuthorizationIndex { entries, len, .. } = &mut self.index;
        let entries = entries
            .entry(role.clone())
            .or_default()
            .entry(resource.clone())
            .or_default();

        for action in actions {
            let sources = entries.entry(action.clone()).or_insert_with(|| {
                *len += 1;
                BTreeSet::new()
            });
            sources.insert(source.clone());
        }
    }

    pub(crate) fn build(self) -> AuthorizationIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthorizationIndex {
        let mut builder = IndexBuilder::new(["editor", "admin", "viewer"].map(RoleName::from));
        let read = [Action::from("read")];
        builder.permit(&"editor".into(), &"editor".into(), &"article".into(), &read);
        builder.permit(&"admin".into(), &"editor".into(), &"article".into(), &read);
        builder.permit(&"admin".into(), &"admin".into(), &"article".into(), &read);
        builder.permit(&"admin".into(), &"admin".into(), &"article".into(), &[Action::from("delete")]);
        builder.build()
    }

    #[test]
    fn lookups_are_exact() {
        let index = sample();
        assert!(index.contains("admin", "read", "article"));
        assert!(index.contains("admin", "delete", "article"));
        assert!(!index.contains("editor", "delete", "article"));
        assert!(!index.contains("admin", "read", "comment"));
        assert!(!index.contains("ghost", "read", "article"));
    }

    #[test]
    fn counts_distinct_triples() {
        let index = sample();
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn tracks_every_source() {
        let index = sample();
        let sources: Vec<&str> = index
            .granted_by("admin", "read", "article")
            .unwrap()
            .iter()
            .map(RoleName::as_str)
            .collect();
        assert_eq!(sources, ["admin", "editor"]);
        assert!(index.granted_by("editor", "delete", "article").is_none());
    }

    #[test]
    fn role_without_entries_is_known_but_empty() {
        let index = sample();
        assert!(index.has_role("viewer"));
        assert!(index.permissions_of("viewer").is_empty());
        assert!(!index.has_role("ghost"));
    }

    #[test]
    fn permissions_of_is_sorted() {
        let perms = sample().permissions_of("admin");
        let actions: Vec<&str> = perms["article"].iter().map(Action::as_str).collect();
        assert_eq!(actions, ["delete", "read"]);
    }
}
