//! Strongly-typed names used across the permissions model.
//!
//! Names are opaque strings. They borrow as `str`, so hash-based lookups can be
//! done with a plain `&str` key and no allocation.

use std::borrow::{Borrow, Cow};

use serde::{Deserialize, Serialize};

/// Name of a role (e.g. "editor").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(Cow<'static, str>);

/// Name of a resource (e.g. "article").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(Cow<'static, str>);

/// Action identifier scoped to a resource (e.g. "read").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Cow<'static, str>);

macro_rules! impl_name_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $t {
            fn from(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

impl_name_newtype!(RoleName);
impl_name_newtype!(ResourceName);
impl_name_newtype!(Action);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn borrowed_and_owned_names_are_equal() {
        assert_eq!(RoleName::from("editor"), RoleName::from("editor".to_string()));
        assert_eq!(Action::new("read"), "read");
    }

    #[test]
    fn lookup_by_str_key() {
        let mut set = HashSet::new();
        set.insert(ResourceName::new(String::from("article")));
        assert!(set.contains("article"));
        assert!(!set.contains("comment"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Action::from("delete")).unwrap();
        assert_eq!(json, "\"delete\"");

        let back: RoleName = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back.as_str(), "admin");
        assert_eq!(back.to_string(), "admin");
    }
}
