//! One handler per type family.
//!
//! Handlers that resolve shortcuts take the optional invocation context.
//! A shortcut that cannot be resolved (no context, a console subject, or
//! an environment answering `None`) is not an error by itself: the token
//! falls through to literal parsing, which then reports the failure.

pub(crate) mod class;
pub(crate) mod entity;
pub(crate) mod enumeration;
pub(crate) mod item;
pub(crate) mod location;
pub(crate) mod scalar;
