//! An in-memory environment of worlds, blocks and entities.
//!
//! Storage uses persistent maps, so cloning a `Sandbox` is cheap and the
//! clone is an independent snapshot.

use std::sync::Arc;

use argcast_coerce::ContextResolver;
use argcast_foundation::{EntityId, EntityRef, Error, ItemStack, Location, Result, WorldRef};
use im::{HashSet, OrdMap};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use uuid::Uuid;

use crate::entity::EntityStore;
use crate::sight;

/// A solid block: world uuid plus integer coordinates.
type Block = (Uuid, i64, i64, i64);

/// Everything the sandbox knows about one entity.
#[derive(Clone, Debug)]
struct Body {
    uuid: Uuid,
    location: Location,
    held: Option<ItemStack>,
    actor: bool,
}

/// Worlds, solid blocks and entities, answering [`ContextResolver`] queries.
///
/// UUIDs for worlds and entities come from a seeded generator, so two
/// sandboxes built the same way from the same seed are identical.
#[derive(Clone, Debug)]
pub struct Sandbox {
    worlds: OrdMap<Arc<str>, WorldRef>,
    blocks: HashSet<Block>,
    entities: EntityStore,
    bodies: OrdMap<EntityId, Body>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Sandbox {
    /// Creates an empty sandbox.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            worlds: OrdMap::new(),
            blocks: HashSet::new(),
            entities: EntityStore::new(),
            bodies: OrdMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this sandbox was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // --- Worlds ---

    /// Creates a world, or returns the existing world of that name.
    pub fn add_world(&mut self, name: &str) -> WorldRef {
        if let Some(world) = self.worlds.get(name) {
            return world.clone();
        }
        let world = WorldRef::new(name, self.next_uuid());
        debug!(world = %world.name, uuid = %world.uuid, "world added");
        self.worlds.insert(world.name.clone(), world.clone());
        world
    }

    /// Looks up a world by exact name.
    #[must_use]
    pub fn world(&self, name: &str) -> Option<&WorldRef> {
        self.worlds.get(name)
    }

    /// Marks the block containing `at` as solid.
    pub fn set_solid(&mut self, at: &Location) {
        self.blocks.insert(block_key(at));
    }

    /// Clears the block containing `at`.
    pub fn clear_block(&mut self, at: &Location) {
        self.blocks.remove(&block_key(at));
    }

    /// Returns true if the block containing `at` is solid.
    #[must_use]
    pub fn is_solid(&self, at: &Location) -> bool {
        self.blocks.contains(&block_key(at))
    }

    // --- Entities ---

    /// Spawns a non-actor entity (a mob or a prop).
    pub fn spawn(&mut self, location: Location) -> EntityRef {
        self.spawn_body(location, false)
    }

    /// Spawns a live actor, the kind of entity `me` can refer to.
    pub fn spawn_actor(&mut self, location: Location) -> EntityRef {
        self.spawn_body(location, true)
    }

    fn spawn_body(&mut self, location: Location, actor: bool) -> EntityRef {
        let id = self.entities.spawn();
        let uuid = self.next_uuid();
        debug!(entity = ?id, %uuid, %location, actor, "entity spawned");
        self.bodies.insert(
            id,
            Body {
                uuid,
                location,
                held: None,
                actor,
            },
        );
        EntityRef::new(id, uuid)
    }

    /// Removes an entity.
    ///
    /// # Errors
    ///
    /// Returns an environment error if `entity` is not live.
    pub fn despawn(&mut self, entity: EntityRef) -> Result<()> {
        self.entities.destroy(entity.id)?;
        self.bodies.remove(&entity.id);
        debug!(entity = ?entity.id, "entity despawned");
        Ok(())
    }

    /// Moves an entity, facing included.
    ///
    /// # Errors
    ///
    /// Returns an environment error if `entity` is not live.
    pub fn teleport(&mut self, entity: EntityRef, location: Location) -> Result<()> {
        self.body_mut(entity)?.location = location;
        Ok(())
    }

    /// Puts an item in the entity's main hand, or empties it.
    ///
    /// # Errors
    ///
    /// Returns an environment error if `entity` is not live.
    pub fn set_held_item(&mut self, entity: EntityRef, item: Option<ItemStack>) -> Result<()> {
        self.body_mut(entity)?.held = item;
        Ok(())
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if `entity` is live.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.body(entity).is_some()
    }

    fn body(&self, entity: EntityRef) -> Option<&Body> {
        if !self.entities.exists(entity.id) {
            return None;
        }
        self.bodies
            .get(&entity.id)
            .filter(|body| body.uuid == entity.uuid)
    }

    fn body_mut(&mut self, entity: EntityRef) -> Result<&mut Body> {
        self.entities.validate(entity.id)?;
        self.bodies
            .get_mut(&entity.id)
            .filter(|body| body.uuid == entity.uuid)
            .ok_or_else(|| Error::environment(format!("entity {entity} has no body")))
    }

    fn others<'a>(
        &'a self,
        world: &'a WorldRef,
        except: Option<EntityId>,
    ) -> impl Iterator<Item = (EntityRef, &'a Location)> + 'a {
        self.bodies
            .iter()
            .filter(move |(id, body)| {
                Some(**id) != except && body.location.world.uuid == world.uuid
            })
            .map(|(id, body)| (EntityRef::new(*id, body.uuid), &body.location))
    }

    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

fn block_key(at: &Location) -> Block {
    let (x, y, z) = at.block_coords();
    (at.world.uuid, x, y, z)
}

impl ContextResolver for Sandbox {
    fn current_position(&self, subject: EntityRef) -> Result<Option<Location>> {
        Ok(self.body(subject).map(|body| body.location.clone()))
    }

    fn sight_line_point(&self, subject: EntityRef, max_distance: f64) -> Result<Option<Location>> {
        Ok(self
            .body(subject)
            .map(|body| sight::march(&body.location, max_distance, |p| self.is_solid(p))))
    }

    fn held_item(&self, subject: EntityRef) -> Result<Option<ItemStack>> {
        Ok(self.body(subject).and_then(|body| body.held.clone()))
    }

    fn nearest_entity(
        &self,
        point: &Location,
        max_distance: f64,
        tolerance: f64,
    ) -> Result<Option<EntityRef>> {
        let reach = max_distance + tolerance;
        Ok(self
            .others(&point.world, None)
            .map(|(entity, location)| (entity, point.distance(location)))
            .filter(|(_, distance)| *distance <= reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity))
    }

    fn entity_in_sight_line(
        &self,
        subject: EntityRef,
        max_distance: f64,
        tolerance: f64,
    ) -> Result<Option<EntityRef>> {
        let Some(body) = self.body(subject) else {
            return Ok(None);
        };
        let origin = &body.location;
        Ok(self
            .others(&origin.world, Some(subject.id))
            .map(|(entity, location)| (entity, sight::ray_offset(origin, location)))
            .filter(|(_, (along, off))| *along > 0.0 && *along <= max_distance && *off <= tolerance)
            .min_by(|a, b| a.1.0.total_cmp(&b.1.0))
            .map(|(entity, _)| entity))
    }

    fn world_by_name(&self, name: &str) -> Result<Option<WorldRef>> {
        Ok(self.worlds.get(name).cloned())
    }

    fn is_live_actor(&self, subject: EntityRef) -> bool {
        self.body(subject).is_some_and(|body| body.actor)
    }
}
