//! Permissions manager: the aggregate root owning every registry and, once
//! compiled, the authorization index.

use std::sync::Arc;

use warden_core::{PermissionsError, PermissionsResult, RoleName};

use crate::compiler;
use crate::configurator::PermissionsConfigurator;
use crate::explain::{self, Decision};
use crate::grant::{Grant, GrantSet};
use crate::graph::RoleGraph;
use crate::index::{AuthorizationIndex, RolePermissions};
use crate::registry::ResourceRegistry;
use crate::resource::Resource;
use crate::role::Role;

/// Lifecycle of a manager. The transition is one-way.
#[derive(Debug, Clone)]
enum State {
    /// Registries accept declarations; queries fail.
    Open,
    /// The index is published; queries only ever read it.
    Compiled(Arc<AuthorizationIndex>),
}

/// Owns roles, resources and grants, compiles them once and answers queries.
///
/// Each manager is independent; there is no process-wide registry.
#[derive(Debug, Clone)]
pub struct PermissionsManager {
    roles: RoleGraph,
    resources: ResourceRegistry,
    grants: GrantSet,
    state: State,
}

impl Default for PermissionsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionsManager {
    pub fn new() -> Self {
        Self {
            roles: RoleGraph::new(),
            resources: ResourceRegistry::new(),
            grants: GrantSet::new(),
            state: State::Open,
        }
    }

    /// Build a manager and run each configurator against it, in order.
    pub fn with_configurators<'a, I>(configurators: I) -> PermissionsResult<Self>
    where
        I: IntoIterator<Item = &'a dyn PermissionsConfigurator>,
    {
        let mut manager = Self::new();
        for configurator in configurators {
            configurator.configure(&mut manager)?;
        }
        Ok(manager)
    }

    /// Run a single configurator against this manager.
    pub fn configure(&mut self, configurator: &dyn PermissionsConfigurator) -> PermissionsResult<&mut Self> {
        configurator.configure(self)?;
        Ok(self)
    }

    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.add_role(role);
        self
    }

    pub fn add_roles(&mut self, roles: impl IntoIterator<Item = Role>) -> &mut Self {
        for role in roles {
            self.roles.add_role(role);
        }
        self
    }

    pub fn add_resource(&mut self, resource: Resource) -> &mut Self {
        self.resources.add_resource(resource);
        self
    }

    pub fn add_resources(&mut self, resources: impl IntoIterator<Item = Resource>) -> &mut Self {
        for resource in resources {
            self.resources.add_resource(resource);
        }
        self
    }

    pub fn add_grant(&mut self, grant: Grant) -> &mut Self {
        self.grants.add_grant(grant);
        self
    }

    pub fn add_grants(&mut self, grants: impl IntoIterator<Item = Grant>) -> &mut Self {
        for grant in grants {
            self.grants.add_grant(grant);
        }
        self
    }

    /// Same as [`add_grants`](Self::add_grants).
    pub fn add_permissions(&mut self, grants: impl IntoIterator<Item = Grant>) -> &mut Self {
        self.add_grants(grants)
    }

    /// Compile declarations into the authorization index.
    ///
    /// All-or-nothing: on failure the manager stays open and can be fixed and
    /// compiled again. A second successful call is rejected and leaves the
    /// first index in place.
    pub fn compile(&mut self) -> PermissionsResult<()> {
        if self.is_compiled() {
            return Err(PermissionsError::AlreadyCompiled);
        }

        let index = compiler::compile(&self.roles, &self.resources, &self.grants)?;
        self.state = State::Compiled(Arc::new(index));
        Ok(())
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self.state, State::Compiled(_))
    }

    /// Whether `role` may perform `action` on `resource`.
    ///
    /// Unknown roles, resources and actions answer `false`. Querying before
    /// `compile()` fails with `NotCompiled`.
    pub fn can(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<bool> {
        let index = self.compiled()?;
        let allowed = index.has_role(role) && index.contains(role, action, resource);
        tracing::trace!(role, action, resource, allowed, "permission check");
        Ok(allowed)
    }

    /// Effective permissions of `role`, inheritance included.
    pub fn permissions_of(&self, role: &str) -> PermissionsResult<RolePermissions> {
        Ok(self.compiled()?.permissions_of(role))
    }

    /// Explain the answer `can` would give.
    pub fn explain(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<Decision> {
        Ok(explain::explain(self.compiled()?, role, action, resource))
    }

    /// Shared handle to the compiled index for concurrent readers.
    pub fn index(&self) -> PermissionsResult<Arc<AuthorizationIndex>> {
        self.compiled().map(Arc::clone)
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.role(name)
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.resource(name)
    }

    /// Transitive ancestors of a registered role.
    pub fn ancestors_of(&self, name: &str) -> PermissionsResult<Vec<RoleName>> {
        self.roles.ancestors_of(name)
    }

    pub fn roles(&self) -> &RoleGraph {
        &self.roles
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn grants(&self) -> &GrantSet {
        &self.grants
    }

    fn compiled(&self) -> PermissionsResult<&Arc<AuthorizationIndex>> {
        match &self.state {
            State::Compiled(index) => Ok(index),
            State::Open => Err(PermissionsError::NotCompiled),
        }
    }
}
