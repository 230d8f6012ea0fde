//! Role graph: registered roles and transitive ancestor resolution.

use std::collections::{BTreeMap, HashMap, HashSet};

use warden_core::{PermissionsError, PermissionsResult, RoleName};

use crate::registry::Registry;
use crate::role::Role;

/// Ancestor sets of every registered role, keyed by role name.
pub type AncestorMap = BTreeMap<RoleName, Vec<RoleName>>;

#[derive(Debug, Clone, Default)]
pub struct RoleGraph {
    roles: Registry<Role>,
}

impl RoleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role. A role with the same name is replaced, parents included.
    pub fn add_role(&mut self, role: Role) {
        if let Some(previous) = self.roles.insert(role) {
            tracing::debug!(role = %previous.name(), "replaced previously registered role");
        }
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Transitive ancestors of `name`.
    ///
    /// Depth-first in declared parent order; each parent comes before its own
    /// ancestors and every name appears once.
    pub fn ancestors_of(&self, name: &str) -> PermissionsResult<Vec<RoleName>> {
        let role = self
            .role(name)
            .ok_or_else(|| PermissionsError::UnknownRole(RoleName::new(name.to_string())))?;

        let mut ancestors = Vec::new();
        ParentWalk::new(self).walk(role.name(), |ancestor| ancestors.push(ancestor.clone()))?;
        Ok(ancestors)
    }

    /// Ancestor sets of every registered role.
    ///
    /// Quadratic in the depth of the graph; compilation does not use it.
    pub fn ancestor_map(&self) -> PermissionsResult<AncestorMap> {
        self.check_acyclic()?;

        let mut map = AncestorMap::new();
        for name in self.roles.ids() {
            map.insert(name.clone(), self.ancestors_of(name.as_str())?);
        }
        Ok(map)
    }

    /// Fail with `CycleDetected` if any role inherits from itself.
    ///
    /// Roles are visited in name order, so the cycle reported for a given
    /// graph is always the same one.
    pub fn check_acyclic(&self) -> PermissionsResult<()> {
        let mut walk = ParentWalk::new(self);
        for name in self.roles.ids() {
            walk.walk(name, |_| {})?;
        }
        Ok(())
    }

    /// Child links of every registered role, for walking inheritance downwards.
    pub fn heirs(&self) -> Heirs<'_> {
        let mut children: HashMap<&RoleName, Vec<&RoleName>> = HashMap::new();
        for role in self.roles.iter() {
            for parent in role.parents() {
                children.entry(parent).or_default().push(role.name());
            }
        }

        Heirs {
            children,
            resolved: HashMap::new(),
        }
    }

    /// Parent names that no registered role carries, with the role naming them.
    pub fn undeclared_parents(&self) -> impl Iterator<Item = (&RoleName, &RoleName)> {
        self.roles.iter().flat_map(move |role| {
            role.parents()
                .iter()
                .filter(move |parent| !self.contains(parent.as_str()))
                .map(move |parent| (role.name(), parent))
        })
    }
}

/// Iterative depth-first walk along parent links with cycle detection.
///
/// Roles finished by an earlier `walk` are skipped, so sharing one walk across
/// many starting roles visits every role once.
struct ParentWalk<'a> {
    graph: &'a RoleGraph,
    finished: HashSet<&'a RoleName>,
}

impl<'a> ParentWalk<'a> {
    fn new(graph: &'a RoleGraph) -> Self {
        Self {
            graph,
            finished: HashSet::new(),
        }
    }

    /// Call `visit` for every not yet finished ancestor of `start`, parents
    /// before their own ancestors.
    fn walk(
        &mut self,
        start: &'a RoleName,
        mut visit: impl FnMut(&'a RoleName),
    ) -> PermissionsResult<()> {
        if self.finished.contains(start) {
            return Ok(());
        }

        // (role, index of the next parent to follow)
        let mut path: Vec<(&'a RoleName, usize)> = vec![(start, 0)];
        let mut on_path: HashMap<&'a RoleName, usize> = HashMap::from([(start, 0)]);

        while let Some((current, cursor)) = path.last_mut() {
            // Undeclared parents are leaves.
            let parents = self
                .graph
                .role(current.as_str())
                .map(Role::parents)
                .unwrap_or_default();

            let Some(parent) = parents.get(*cursor) else {
                let done = *current;
                path.pop();
                on_path.remove(done);
                self.finished.insert(done);
                continue;
            };
            *cursor += 1;

            if let Some(&depth) = on_path.get(parent) {
                let mut cycle: Vec<RoleName> =
                    path[depth..].iter().map(|(role, _)| (*role).clone()).collect();
                cycle.push(parent.clone());
                return Err(PermissionsError::CycleDetected { path: cycle });
            }
            if self.finished.contains(parent) {
                continue;
            }

            visit(parent);
            on_path.insert(parent, path.len());
            path.push((parent, 0));
        }

        Ok(())
    }
}

/// Downward inheritance: which roles inherit from a given role.
///
/// Results are cached per role, so several grants to one role walk the graph
/// once.
pub struct Heirs<'a> {
    children: HashMap<&'a RoleName, Vec<&'a RoleName>>,
    resolved: HashMap<&'a RoleName, Vec<&'a RoleName>>,
}

impl<'a> Heirs<'a> {
    /// Every role that has `role` among its transitive ancestors.
    pub fn of(&mut self, role: &'a RoleName) -> &[&'a RoleName] {
        let children = &self.children;
        self.resolved.entry(role).or_insert_with(|| {
            let mut seen: HashSet<&RoleName> = HashSet::new();
            let mut heirs = Vec::new();
            let mut pending = vec![role];
            while let Some(current) = pending.pop() {
                for &child in children.get(current).into_iter().flatten() {
                    if seen.insert(child) {
                        heirs.push(child);
                        pending.push(child);
                    }
                }
            }
            heirs
        })
    }
}
