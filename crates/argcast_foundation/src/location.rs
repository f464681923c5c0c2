//! Worlds and points within them.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A loaded world, as identified by the environment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldRef {
    /// World name, as typed by users.
    pub name: Arc<str>,
    /// Persistent unique identifier.
    pub uuid: Uuid,
}

impl WorldRef {
    /// Creates a new world reference.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, uuid: Uuid) -> Self {
        Self {
            name: name.into(),
            uuid,
        }
    }
}

impl fmt::Display for WorldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A point in a world, with an optional facing.
///
/// Yaw and pitch are in degrees: yaw 0 faces +z and grows clockwise seen
/// from above, pitch 90 faces straight down.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// The world this point belongs to.
    pub world: WorldRef,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Horizontal rotation in degrees.
    pub yaw: f32,
    /// Vertical rotation in degrees.
    pub pitch: f32,
}

impl Location {
    /// Creates a point with zero facing.
    #[must_use]
    pub fn new(world: WorldRef, x: f64, y: f64, z: f64) -> Self {
        Self {
            world,
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Sets the facing.
    #[must_use]
    pub fn with_facing(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Returns the location of the block containing this point.
    #[must_use]
    pub fn block_location(&self) -> Self {
        Self::new(
            self.world.clone(),
            self.x.floor(),
            self.y.floor(),
            self.z.floor(),
        )
    }

    /// Returns the integer coordinates of the block containing this point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn block_coords(&self) -> (i64, i64, i64) {
        (
            self.x.floor() as i64,
            self.y.floor() as i64,
            self.z.floor() as i64,
        )
    }

    /// Unit vector pointing where this location faces.
    #[must_use]
    pub fn direction(&self) -> [f64; 3] {
        let yaw = f64::from(self.yaw).to_radians();
        let pitch = f64::from(self.pitch).to_radians();
        let xz = pitch.cos();
        [-xz * yaw.sin(), -pitch.sin(), xz * yaw.cos()]
    }

    /// Returns this point moved by `distance` along `direction`.
    #[must_use]
    pub fn offset(&self, direction: [f64; 3], distance: f64) -> Self {
        Self {
            x: self.x + direction[0] * distance,
            y: self.y + direction[1] * distance,
            z: self.z + direction[2] * distance,
            ..self.clone()
        }
    }

    /// Squared distance to another point, ignoring worlds.
    #[must_use]
    pub fn distance_squared(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance to another point, ignoring worlds.
    #[must_use]
    pub fn distance(&self, other: &Location) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns true if both points are in the same world.
    #[must_use]
    pub fn same_world(&self, other: &Location) -> bool {
        self.world.uuid == other.world.uuid
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.world, self.x, self.y, self.z)
    }
}
