//! Materials and item stacks.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A material kind, identified by its canonical upper-snake name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    name: Arc<str>,
}

impl Material {
    /// Creates a material from its canonical name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.name)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A material refined by a legacy data value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialData {
    /// The material kind.
    pub material: Material,
    /// Legacy data value (signed byte).
    pub data: i8,
}

impl MaterialData {
    /// Creates a new material/data pair.
    #[must_use]
    pub fn new(material: Material, data: i8) -> Self {
        Self { material, data }
    }
}

impl fmt::Display for MaterialData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.material, self.data)
    }
}

/// A quantity of one material.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemStack {
    /// The material kind.
    pub material: Material,
    /// Number of items in the stack.
    pub amount: u32,
}

impl ItemStack {
    /// Creates a stack of `amount` items.
    #[must_use]
    pub fn new(material: Material, amount: u32) -> Self {
        Self { material, amount }
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.amount, self.material)
    }
}
