//! In-memory environment for argcast.
//!
//! [`Sandbox`] implements [`ContextResolver`](argcast_coerce::ContextResolver)
//! over plain data: named worlds, a set of solid blocks per world, and
//! entities with a position, a facing, a held item and an actor flag. It is
//! what the workspace tests resolve shortcuts against, and a starting
//! point for embedders that want to try coercion without a game server.
//!
//! # Modules
//!
//! - [`entity`] - Generational entity id allocation
//! - [`sandbox`] - Worlds, blocks and entities
//! - [`sight`] - Ray marching and distance from a sight line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod sandbox;
pub mod sight;

pub use entity::EntityStore;
pub use sandbox::Sandbox;
