//! Sight-line geometry.

use argcast_foundation::Location;

/// March step along a ray, in blocks.
pub const STEP: f64 = 0.1;

/// Longest distance a ray is marched, in blocks.
pub const MAX_REACH: f64 = 1024.0;

/// Walks from `origin` along its facing and returns the block location of
/// the first block for which `solid` is true. If nothing is hit within
/// `max_distance`, returns the block at `max_distance`.
///
/// `max_distance` is clamped to `0..=MAX_REACH`; NaN marches nowhere and
/// yields the origin block.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn march(
    origin: &Location,
    max_distance: f64,
    solid: impl Fn(&Location) -> bool,
) -> Location {
    if max_distance.is_nan() {
        return origin.block_location();
    }
    let max_distance = max_distance.clamp(0.0, MAX_REACH);
    let direction = origin.direction();
    let steps = (max_distance / STEP).ceil() as u64;

    for step in 1..=steps {
        let distance = (step as f64 * STEP).min(max_distance);
        let point = origin.offset(direction, distance);
        if solid(&point) {
            return point.block_location();
        }
    }

    origin.offset(direction, max_distance).block_location()
}

/// Position of `point` relative to the ray from `origin` along its facing.
///
/// Returns `(along, off)`: the signed distance along the ray of the
/// projection of `point`, and the perpendicular distance from the ray.
#[must_use]
pub fn ray_offset(origin: &Location, point: &Location) -> (f64, f64) {
    let [dx, dy, dz] = origin.direction();
    let v = [point.x - origin.x, point.y - origin.y, point.z - origin.z];
    let along = v[0] * dx + v[1] * dy + v[2] * dz;
    let off_squared = origin.distance_squared(point) - along * along;
    (along, off_squared.max(0.0).sqrt())
}
