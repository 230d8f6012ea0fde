//! Registry keys for roles and resources.

/// Something a registry stores under its name.
///
/// Roles and resources are looked up, replaced and iterated by `id()`;
/// registering a second value with the same id replaces the first, and the
/// `Ord` bound keeps registry iteration (and so compile-time error reporting)
/// in a stable order.
pub trait Entity {
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
