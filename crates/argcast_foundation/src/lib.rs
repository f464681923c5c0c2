//! Core types, domain values, and errors for argcast.
//!
//! This crate provides:
//! - [`TypeDescriptor`] - Closed set of coercion targets
//! - [`CoercedValue`] - The value produced for one token
//! - [`EntityId`] / [`EntityRef`] - Generational entity identifiers
//! - Domain values ([`Location`], [`Material`], [`ItemStack`], [`GameMode`], ...)
//! - [`Error`] - Rich error types with context
//! - [`CoercionConfig`] - Distances and defaults used by the coercer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class;
pub mod config;
pub mod entity;
pub mod enums;
pub mod error;
pub mod item;
pub mod location;
pub mod types;
pub mod value;

pub use class::EntityClass;
pub use config::CoercionConfig;
pub use entity::{EntityId, EntityRef};
pub use enums::{Difficulty, EnumDef, EnumValue, GameMode};
pub use error::{Error, ErrorContext, ErrorKind, ParseFailure, Reference};
pub use item::{ItemStack, Material, MaterialData};
pub use location::{Location, WorldRef};
pub use types::TypeDescriptor;
pub use value::CoercedValue;

/// Result type alias using the argcast [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
