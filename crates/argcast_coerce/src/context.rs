//! Invocation context and the environment capability trait.
//!
//! Shortcut keywords (`here`, `there`, `me`, `that`, `this`) only mean
//! something relative to whoever is asking. The [`InvocationContext`] names
//! that subject; the [`ContextResolver`] answers the spatial and identity
//! questions the handlers need.

use argcast_foundation::{EntityRef, ItemStack, Location, Result, WorldRef};

/// Who is invoking the coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    /// A non-entity sender such as a server console. No shortcut applies.
    Console,
    /// An entity in a world.
    Entity(EntityRef),
}

/// The optional "who is asking" half of a coercion call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvocationContext {
    subject: Subject,
}

impl InvocationContext {
    /// Creates a context for a console sender.
    #[must_use]
    pub const fn console() -> Self {
        Self {
            subject: Subject::Console,
        }
    }

    /// Creates a context for an entity sender.
    #[must_use]
    pub const fn entity(entity: EntityRef) -> Self {
        Self {
            subject: Subject::Entity(entity),
        }
    }

    /// Returns the subject.
    #[must_use]
    pub const fn subject(&self) -> Subject {
        self.subject
    }

    /// Returns the subject entity, if the sender is one.
    #[must_use]
    pub const fn subject_entity(&self) -> Option<EntityRef> {
        match self.subject {
            Subject::Entity(entity) => Some(entity),
            Subject::Console => None,
        }
    }
}

/// Read-only queries against the invocation environment.
///
/// Every query reports "nothing there" as `Ok(None)` (or `false`). `Err` is
/// reserved for genuine faults of the environment itself.
pub trait ContextResolver {
    /// Current position and facing of `subject`.
    fn current_position(&self, subject: EntityRef) -> Result<Option<Location>>;

    /// The block `subject` is looking at, up to `max_distance` away.
    ///
    /// When nothing obstructs the sight line the block at `max_distance` is
    /// returned.
    fn sight_line_point(&self, subject: EntityRef, max_distance: f64) -> Result<Option<Location>>;

    /// The item `subject` holds in its main hand.
    fn held_item(&self, subject: EntityRef) -> Result<Option<ItemStack>>;

    /// Nearest live entity to `point` within `max_distance`, widened by
    /// `tolerance`.
    fn nearest_entity(
        &self,
        point: &Location,
        max_distance: f64,
        tolerance: f64,
    ) -> Result<Option<EntityRef>>;

    /// Nearest entity along the sight line of `subject`, at most
    /// `max_distance` away and at most `tolerance` off the line.
    fn entity_in_sight_line(
        &self,
        subject: EntityRef,
        max_distance: f64,
        tolerance: f64,
    ) -> Result<Option<EntityRef>>;

    /// Looks up a loaded world by name.
    fn world_by_name(&self, name: &str) -> Result<Option<WorldRef>>;

    /// Returns true if `subject` is a live actor (a player, not a prop).
    fn is_live_actor(&self, subject: EntityRef) -> bool;
}

/// An environment with no worlds and no entities.
///
/// Useful when only scalar, text, enumeration or registry-backed types are
/// coerced.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl ContextResolver for Detached {
    fn current_position(&self, _subject: EntityRef) -> Result<Option<Location>> {
        Ok(None)
    }

    fn sight_line_point(
        &self,
        _subject: EntityRef,
        _max_distance: f64,
    ) -> Result<Option<Location>> {
        Ok(None)
    }

    fn held_item(&self, _subject: EntityRef) -> Result<Option<ItemStack>> {
        Ok(None)
    }

    fn nearest_entity(
        &self,
        _point: &Location,
        _max_distance: f64,
        _tolerance: f64,
    ) -> Result<Option<EntityRef>> {
        Ok(None)
    }

    fn entity_in_sight_line(
        &self,
        _subject: EntityRef,
        _max_distance: f64,
        _tolerance: f64,
    ) -> Result<Option<EntityRef>> {
        Ok(None)
    }

    fn world_by_name(&self, _name: &str) -> Result<Option<WorldRef>> {
        Ok(None)
    }

    fn is_live_actor(&self, _subject: EntityRef) -> bool {
        false
    }
}
