//! Type descriptors naming the target of a coercion.

use std::borrow::Cow;
use std::fmt;

use crate::enums::EnumDef;

/// Identifies the type a raw token should be coerced into.
///
/// The set is closed: every variant except [`TypeDescriptor::Opaque`] has a
/// handler. `Opaque` lets callers describe a parameter type they know about
/// but that has no coercion rule, which surfaces as an unsupported-type error
/// rather than a parse error.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Free text, returned unchanged.
    Text,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Permissive boolean.
    Bool,
    /// A single character.
    Char,
    /// Member of a named enumeration.
    Enum(&'static EnumDef),
    /// Material kind, fuzzy matched by name.
    Material,
    /// Material kind plus numeric data value (`kind:data`).
    MaterialData,
    /// Item stack (`this` or a material name).
    ItemStack,
    /// Game mode (legacy code or name).
    GameMode,
    /// Difficulty (legacy code or name).
    Difficulty,
    /// Unique identifier, or an entity shortcut resolving to one.
    Uuid,
    /// Point in a world (`here`, `there`, or `world,x,y,z`).
    Location,
    /// Entity reference (`that`, `me`, or a location to search near).
    Entity,
    /// A single entity class name.
    EntityClass,
    /// Comma separated entity class names.
    EntityClassList,
    /// A type known to the caller with no coercion rule.
    Opaque(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Creates an opaque descriptor with the given type name.
    #[must_use]
    pub fn opaque(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Opaque(name.into())
    }

    /// Returns true if coercing this type may consult the invocation context.
    #[must_use]
    pub const fn uses_context(&self) -> bool {
        matches!(
            self,
            Self::ItemStack | Self::Uuid | Self::Location | Self::Entity
        )
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "string"),
            Self::Byte => write!(f, "byte"),
            Self::Short => write!(f, "short"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Bool => write!(f, "boolean"),
            Self::Char => write!(f, "char"),
            Self::Enum(def) => write!(f, "enum {}", def.name),
            Self::Material => write!(f, "material"),
            Self::MaterialData => write!(f, "material-data"),
            Self::ItemStack => write!(f, "item-stack"),
            Self::GameMode => write!(f, "game-mode"),
            Self::Difficulty => write!(f, "difficulty"),
            Self::Uuid => write!(f, "uuid"),
            Self::Location => write!(f, "location"),
            Self::Entity => write!(f, "entity"),
            Self::EntityClass => write!(f, "entity-class"),
            Self::EntityClassList => write!(f, "entity-class[]"),
            Self::Opaque(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
