//! Entity class descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named entity class, qualified by the namespace that defines it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EntityClass {
    /// Namespace the class was found in.
    pub namespace: &'static str,
    /// Simple class name.
    pub name: &'static str,
}

impl EntityClass {
    /// Creates a class descriptor.
    #[must_use]
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}
