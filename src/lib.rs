//! argcast - Type-directed coercion of command arguments
//!
//! This crate re-exports all layers of argcast for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: argcast_sandbox    - In-memory worlds and entities
//! Layer 1: argcast_coerce     - Dispatcher, handlers, registries, resolver trait
//! Layer 0: argcast_foundation - Descriptors, values, domain types, errors
//! ```

pub use argcast_coerce as coerce;
pub use argcast_foundation as foundation;
pub use argcast_sandbox as sandbox;
