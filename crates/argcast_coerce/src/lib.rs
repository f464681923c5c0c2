//! Type-directed coercion of string arguments.
//!
//! Given target type descriptors and raw tokens, the [`Coercer`] produces
//! one [`CoercedValue`](argcast_foundation::CoercedValue) per token.
//!
//! # Architecture
//!
//! ```text
//! [TypeDescriptor], [token], Option<&InvocationContext>
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   DISPATCHER    │  one (descriptor, token) pair at a time, fail fast
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TYPE HANDLERS   │  scalars, enums, materials, locations, entities, classes
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CONTEXT         │  here / there / me / that / this, world and entity lookups
//! │ RESOLVER        │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`coercer`] - The dispatcher and its configuration
//! - [`context`] - Invocation context and the environment capability trait
//! - [`materials`] - Material name registry with fuzzy matching
//! - [`classes`] - Entity class namespaces searched by normalized name

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classes;
pub mod coercer;
pub mod context;
mod handlers;
pub mod materials;

pub use classes::{ClassNamespace, ClassRegistry};
pub use coercer::{Coercer, coerce_all};
pub use context::{ContextResolver, Detached, InvocationContext, Subject};
pub use materials::{MaterialRegistry, MaterialTable};
