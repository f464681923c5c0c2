//! The value produced by coercing one token.

use std::fmt;

use uuid::Uuid;

use crate::class::EntityClass;
use crate::entity::EntityRef;
use crate::enums::{Difficulty, EnumValue, GameMode};
use crate::item::{ItemStack, Material, MaterialData};
use crate::location::Location;
use crate::types::TypeDescriptor;

/// A coerced argument.
///
/// There is one variant per [`TypeDescriptor`] with a handler. The two
/// optional payloads ([`CoercedValue::Material`] and
/// [`CoercedValue::Entity`]) carry `None` when the lookup found nothing,
/// which is a successful coercion, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum CoercedValue {
    /// Free text.
    Text(String),
    /// 8-bit signed integer.
    Byte(i8),
    /// 16-bit signed integer.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// Single precision float.
    Float(f32),
    /// Double precision float.
    Double(f64),
    /// Boolean.
    Bool(bool),
    /// Character.
    Char(char),
    /// Enumeration member.
    Enum(EnumValue),
    /// Material, absent when no registry entry matched.
    Material(Option<Material>),
    /// Material with data value.
    MaterialData(MaterialData),
    /// Item stack.
    ItemStack(ItemStack),
    /// Game mode.
    GameMode(GameMode),
    /// Difficulty.
    Difficulty(Difficulty),
    /// Unique identifier.
    Uuid(Uuid),
    /// Point in a world.
    Location(Location),
    /// Entity, absent when the search found nothing.
    Entity(Option<EntityRef>),
    /// Entity class.
    EntityClass(EntityClass),
    /// Entity classes, in input order.
    EntityClassList(Vec<EntityClass>),
}

impl CoercedValue {
    /// Returns the descriptor this value satisfies.
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Self::Text(_) => TypeDescriptor::Text,
            Self::Byte(_) => TypeDescriptor::Byte,
            Self::Short(_) => TypeDescriptor::Short,
            Self::Int(_) => TypeDescriptor::Int,
            Self::Long(_) => TypeDescriptor::Long,
            Self::Float(_) => TypeDescriptor::Float,
            Self::Double(_) => TypeDescriptor::Double,
            Self::Bool(_) => TypeDescriptor::Bool,
            Self::Char(_) => TypeDescriptor::Char,
            Self::Enum(v) => TypeDescriptor::Enum(v.def),
            Self::Material(_) => TypeDescriptor::Material,
            Self::MaterialData(_) => TypeDescriptor::MaterialData,
            Self::ItemStack(_) => TypeDescriptor::ItemStack,
            Self::GameMode(_) => TypeDescriptor::GameMode,
            Self::Difficulty(_) => TypeDescriptor::Difficulty,
            Self::Uuid(_) => TypeDescriptor::Uuid,
            Self::Location(_) => TypeDescriptor::Location,
            Self::Entity(_) => TypeDescriptor::Entity,
            Self::EntityClass(_) => TypeDescriptor::EntityClass,
            Self::EntityClassList(_) => TypeDescriptor::EntityClassList,
        }
    }

    /// Returns true for the absent outcome of a material or entity lookup.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Material(None) | Self::Entity(None))
    }

    /// Attempts to extract text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract any integer kind, widened to `i64`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Byte(n) => Some(i64::from(*n)),
            Self::Short(n) => Some(i64::from(*n)),
            Self::Int(n) => Some(i64::from(*n)),
            Self::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an enumeration member.
    #[must_use]
    pub const fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract a location.
    #[must_use]
    pub const fn as_location(&self) -> Option<&Location> {
        match self {
            Self::Location(loc) => Some(loc),
            _ => None,
        }
    }

    /// Attempts to extract a resolved entity.
    #[must_use]
    pub const fn as_entity(&self) -> Option<&EntityRef> {
        match self {
            Self::Entity(Some(e)) => Some(e),
            _ => None,
        }
    }

    /// Attempts to extract an item stack.
    #[must_use]
    pub const fn as_item_stack(&self) -> Option<&ItemStack> {
        match self {
            Self::ItemStack(stack) => Some(stack),
            _ => None,
        }
    }
}

impl fmt::Display for CoercedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Byte(n) => write!(f, "{n}"),
            Self::Short(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Material(Some(m)) => write!(f, "{m}"),
            Self::Material(None) | Self::Entity(None) => write!(f, "null"),
            Self::MaterialData(d) => write!(f, "{d}"),
            Self::ItemStack(s) => write!(f, "{s}"),
            Self::GameMode(m) => write!(f, "{m}"),
            Self::Difficulty(d) => write!(f, "{d}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Location(l) => write!(f, "{l}"),
            Self::Entity(Some(e)) => write!(f, "{e}"),
            Self::EntityClass(c) => write!(f, "{c}"),
            Self::EntityClassList(classes) => {
                write!(f, "[")?;
                for (i, class) in classes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{class}")?;
                }
                write!(f, "]")
            }
        }
    }
}
