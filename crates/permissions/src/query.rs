//! The `can` seam host applications depend on.

use std::sync::Arc;

use warden_core::PermissionsResult;

use crate::index::AuthorizationIndex;
use crate::manager::PermissionsManager;

/// Anything that can answer "may `role` perform `action` on `resource`?".
///
/// Middleware and command guards should take `&impl PermissionAware` (or a
/// `dyn`) rather than a concrete manager.
pub trait PermissionAware {
    fn can(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<bool>;
}

impl PermissionAware for PermissionsManager {
    fn can(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<bool> {
        PermissionsManager::can(self, role, action, resource)
    }
}

/// A compiled index never fails.
impl PermissionAware for AuthorizationIndex {
    fn can(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<bool> {
        Ok(self.contains(role, action, resource))
    }
}

impl<T: PermissionAware + ?Sized> PermissionAware for Arc<T> {
    fn can(&self, role: &str, action: &str, resource: &str) -> PermissionsResult<bool> {
        (**self).can(role, action, resource)
    }
}

/// Check every `(action, resource)` pair, stopping at the first denial.
pub fn can_all<P>(checker: &P, role: &str, required: &[(&str, &str)]) -> PermissionsResult<bool>
where
    P: PermissionAware + ?Sized,
{
    for (action, resource) in required {
        if !checker.can(role, action, resource)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use warden_core::PermissionsError;

    use super::*;
    use crate::{Grant, Resource, Role};

    fn compiled() -> PermissionsManager {
        let mut manager = PermissionsManager::new();
        manager
            .add_role(Role::root("clerk").unwrap())
            .add_resource(Resource::crud("invoice"))
            .add_grant(Grant::new("clerk", "invoice", ["read", "create"]));
        manager.compile().unwrap();
        manager
    }

    #[test]
    fn manager_and_index_agree() {
        let manager = compiled();
        let index = manager.index().unwrap();
        let checkers: [&dyn PermissionAware; 2] = [&manager, &index];

        for checker in checkers {
            assert_eq!(checker.can("clerk", "read", "invoice"), Ok(true));
            assert_eq!(checker.can("clerk", "delete", "invoice"), Ok(false));
            assert_eq!(checker.can("nobody", "read", "invoice"), Ok(false));
        }
    }

    #[test]
    fn can_all_requires_every_pair() {
        let manager = compiled();
        assert_eq!(
            can_all(&manager, "clerk", &[("read", "invoice"), ("create", "invoice")]),
            Ok(true)
        );
        assert_eq!(
            can_all(&manager, "clerk", &[("read", "invoice"), ("delete", "invoice")]),
            Ok(false)
        );
    }

    #[test]
    fn can_all_propagates_not_compiled() {
        let manager = PermissionsManager::new();
        assert_eq!(
            can_all(&manager, "clerk", &[("read", "invoice")]),
            Err(PermissionsError::NotCompiled)
        );
    }
}
