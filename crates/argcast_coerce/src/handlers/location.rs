//! Locations: `here`, `there`, or `world,x,y,z`.

use std::num::ParseFloatError;

use argcast_foundation::{Error, Location, ParseFailure, Reference, Result, TypeDescriptor};
use tracing::trace;

use crate::coercer::Coercer;
use crate::context::InvocationContext;

const FIELDS: usize = 4;

/// Resolves the positional shortcuts, falling through to the literal form.
pub(crate) fn location(
    coercer: &Coercer<'_>,
    token: &str,
    ctx: Option<&InvocationContext>,
) -> Result<Location> {
    if let Some(subject) = ctx.and_then(InvocationContext::subject_entity) {
        let shortcut = if token.eq_ignore_ascii_case("here") {
            coercer.resolver.current_position(subject)?
        } else if token.eq_ignore_ascii_case("there") {
            coercer
                .resolver
                .sight_line_point(subject, coercer.config.sight_range)?
        } else {
            None
        };
        if let Some(location) = shortcut {
            trace!(token, %subject, %location, "location from shortcut");
            return Ok(location);
        }
    }

    literal(coercer, token)
}

/// Parses `world,x,y,z`. Coordinates may carry surrounding whitespace.
fn literal(coercer: &Coercer<'_>, token: &str) -> Result<Location> {
    let fields: Vec<&str> = token.splitn(FIELDS, ',').collect();
    let &[world, x, y, z] = fields.as_slice() else {
        return Err(Error::parse(
            token,
            TypeDescriptor::Location,
            ParseFailure::FieldCount {
                expected: FIELDS,
                found: fields.len(),
            },
        ));
    };

    let world = coercer
        .resolver
        .world_by_name(world)?
        .ok_or_else(|| Error::not_found(Reference::World, world))?;

    Ok(Location::new(
        world,
        coordinate(x)?,
        coordinate(y)?,
        coordinate(z)?,
    ))
}

fn coordinate(field: &str) -> Result<f64> {
    field
        .trim()
        .parse()
        .map_err(|err: ParseFloatError| Error::parse(field, TypeDescriptor::Location, err.into()))
}
