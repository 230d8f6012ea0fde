//! One-shot compilation of roles, resources and grants into an index.

use warden_core::{Action, PermissionsError, PermissionsResult};

use crate::grant::{Grant, GrantSet};
use crate::graph::RoleGraph;
use crate::index::{AuthorizationIndex, IndexBuilder};
use crate::registry::ResourceRegistry;
use crate::resource::Resource;
use crate::role::Role;

/// Compile the declarations into an [`AuthorizationIndex`].
///
/// Inheritance is flattened here: every grant is written for its own role and
/// for every role that has that role among its transitive ancestors. Graph walks
/// are iterative, so arbitrarily deep chains compile. Nothing is published on
/// failure.
pub fn compile(
    roles: &RoleGraph,
    resources: &ResourceRegistry,
    grants: &GrantSet,
) -> PermissionsResult<AuthorizationIndex> {
    roles.check_acyclic()?;

    for (role, parent) in roles.undeclared_parents() {
        tracing::warn!(%role, %parent, "role inherits from an unregistered role");
    }

    let mut heirs = roles.heirs();
    let mut builder = IndexBuilder::new(roles.iter().map(|role| role.name().clone()));
    for grant in grants.iter() {
        let role = roles
            .role(grant.role().as_str())
            .map(Role::name)
            .ok_or_else(|| PermissionsError::UnknownRole(grant.role().clone()))?;

        let resource = resources
            .resource(grant.resource().as_str())
            .ok_or_else(|| PermissionsError::UnknownResource(grant.resource().clone()))?;

        let actions = effective_actions(grant, resource)?;

        builder.permit(role, role, resource.name(), &actions);
        for heir in heirs.of(role) {
            builder.permit(heir, role, resource.name(), &actions);
        }
    }

    let index = builder.build();
    tracing::info!(
        roles = roles.len(),
        resources = resources.len(),
        grants = grants.len(),
        entries = index.len(),
        "compiled permissions"
    );

    Ok(index)
}

/// The grant's actions, or all of the resource's actions when none are named.
///
/// Every undeclared action is reported, not just the first one.
fn effective_actions(grant: &Grant, resource: &Resource) -> PermissionsResult<Vec<Action>> {
    if grant.actions().is_empty() {
        return Ok(resource.actions().to_vec());
    }

    let mut valid: Vec<Action> = Vec::new();
    let mut invalid: Vec<Action> = Vec::new();
    for action in grant.actions() {
        let bucket = if resource.supports(action.as_str()) {
            &mut valid
        } else {
            &mut invalid
        };
        if !bucket.contains(action) {
            bucket.push(action.clone());
        }
    }

    if invalid.is_empty() {
        Ok(valid)
    } else {
        Err(PermissionsError::InvalidAction {
            resource: resource.name().clone(),
            actions: invalid,
        })
    }
}
