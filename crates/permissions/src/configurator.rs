use warden_core::PermissionsResult;

use crate::manager::PermissionsManager;

/// Registers roles, resources and grants against a manager.
///
/// Configurators are how host code composes its permission declarations; the
/// manager applies them in order before anything is compiled.
pub trait PermissionsConfigurator {
    fn configure(&self, manager: &mut PermissionsManager) -> PermissionsResult<()>;
}

impl<F> PermissionsConfigurator for F
where
    F: Fn(&mut PermissionsManager) -> PermissionsResult<()>,
{
    fn configure(&self, manager: &mut PermissionsManager) -> PermissionsResult<()> {
        self(manager)
    }
}
