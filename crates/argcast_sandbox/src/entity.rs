//! Entity lifecycle with generational indices.
//!
//! The `EntityStore` allocates entity ids and tracks generations so that a
//! reference to a despawned entity is never mistaken for a live one.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use argcast_foundation::{EntityId, Error, Result};

/// Allocates entity ids and tracks which are live.
///
/// Indices of despawned entities are reused; each reuse bumps the
/// generation so stale ids stop validating.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// Generation per index. Even generations are free, odd are alive.
    generations: Vec<u32>,
    /// Indices available for reuse.
    free_list: Vec<u64>,
    live_count: usize,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a live id, reusing a free index when one exists.
    pub fn spawn(&mut self) -> EntityId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            // Even (free) becomes odd (alive)
            self.generations[idx] += 1;
            EntityId::new(index, self.generations[idx])
        } else {
            let index = self.generations.len() as u64;
            self.generations.push(1);
            EntityId::new(index, 1)
        }
    }

    /// Frees a live id.
    ///
    /// # Errors
    ///
    /// Returns an environment error if the id is stale or was never live.
    pub fn destroy(&mut self, id: EntityId) -> Result<()> {
        self.validate(id)?;

        let idx = id.index as usize;
        self.generations[idx] += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;

        Ok(())
    }

    /// Returns true if `id` is live.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.generations
            .get(id.index as usize)
            .is_some_and(|generation| *generation == id.generation && generation % 2 == 1)
    }

    /// Checks that `id` is live.
    ///
    /// # Errors
    ///
    /// Distinguishes ids that never existed from stale ones.
    pub fn validate(&self, id: EntityId) -> Result<()> {
        match self.generations.get(id.index as usize) {
            None => Err(Error::environment(format!("no such entity {id:?}"))),
            Some(current) if *current != id.generation => Err(Error::environment(format!(
                "stale entity {id:?}, slot is at generation {current}"
            ))),
            Some(current) if current % 2 == 0 => {
                Err(Error::environment(format!("entity {id:?} was despawned")))
            }
            Some(_) => Ok(()),
        }
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if nothing is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }
}
