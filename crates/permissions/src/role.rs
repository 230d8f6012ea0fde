use serde::{Deserialize, Serialize};

use warden_core::{Entity, PermissionsError, PermissionsResult, RoleName};

/// A named role and the roles it inherits from.
///
/// Parents are referenced by name and resolved through the role graph at
/// compile time, so roles can be registered in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoleRecord")]
pub struct Role {
    name: RoleName,
    parents: Vec<RoleName>,
}

/// Wire shape of a role before its name is validated.
#[derive(Deserialize)]
struct RoleRecord {
    name: RoleName,
    #[serde(default)]
    parents: Vec<RoleName>,
}

impl TryFrom<RoleRecord> for Role {
    type Error = PermissionsError;

    fn try_from(value: RoleRecord) -> Result<Self, Self::Error> {
        Role::new(value.name, value.parents)
    }
}

impl Role {
    /// Create a role. Blank names, its own or a parent's, are rejected with
    /// `InvalidRoleName`.
    pub fn new<P>(name: impl Into<RoleName>, parents: P) -> PermissionsResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<RoleName>,
    {
        let name = checked(name.into())?;
        let parents = parents
            .into_iter()
            .map(|parent| checked(parent.into()))
            .collect::<PermissionsResult<Vec<_>>>()?;

        Ok(Self { name, parents })
    }

    /// Create a role without parents.
    pub fn root(name: impl Into<RoleName>) -> PermissionsResult<Self> {
        Self::new(name, core::iter::empty::<RoleName>())
    }

    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// Declared parents, in declaration order.
    pub fn parents(&self) -> &[RoleName] {
        &self.parents
    }
}

/// No role can be registered under a blank name.
fn checked(name: RoleName) -> PermissionsResult<RoleName> {
    if name.as_str().trim().is_empty() {
        return Err(PermissionsError::invalid_role_name(name.as_str()));
    }
    Ok(name)
}

impl Entity for Role {
    type Id = RoleName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
