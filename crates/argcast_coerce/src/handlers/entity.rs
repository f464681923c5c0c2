//! Entities and UUIDs.

use argcast_foundation::{EntityRef, Error, ErrorKind, Result, TypeDescriptor};
use tracing::trace;
use uuid::Uuid;

use crate::coercer::Coercer;
use crate::context::InvocationContext;
use crate::handlers::location;

/// `that`, `me`, or a location to search around.
///
/// Returns `Ok(None)` when the search around a valid location finds nobody.
pub(crate) fn entity(
    coercer: &Coercer<'_>,
    token: &str,
    ctx: Option<&InvocationContext>,
) -> Result<Option<EntityRef>> {
    let config = &coercer.config;

    if let Some(subject) = ctx.and_then(InvocationContext::subject_entity) {
        if token.eq_ignore_ascii_case("that") {
            let seen = coercer.resolver.entity_in_sight_line(
                subject,
                config.entity_search_radius,
                config.entity_tolerance,
            )?;
            if let Some(seen) = seen {
                trace!(%subject, %seen, "entity from sight line");
                return Ok(Some(seen));
            }
        } else if token.eq_ignore_ascii_case("me") && coercer.resolver.is_live_actor(subject) {
            return Ok(Some(subject));
        }
    }

    let point = location::location(coercer, token, ctx)?;
    coercer.resolver.nearest_entity(
        &point,
        config.entity_search_radius,
        config.entity_tolerance,
    )
}

/// A canonical UUID, or with a context, anything [`entity`] resolves.
pub(crate) fn uuid(
    coercer: &Coercer<'_>,
    token: &str,
    ctx: Option<&InvocationContext>,
) -> Result<Uuid> {
    let err = match Uuid::parse_str(token) {
        Ok(uuid) => return Ok(uuid),
        Err(err) => err,
    };

    if ctx.is_some() {
        match entity(coercer, token, ctx) {
            Ok(Some(found)) => {
                trace!(token, %found, "uuid from entity");
                return Ok(found.uuid);
            }
            Err(fault) if matches!(fault.kind, ErrorKind::Environment(_)) => return Err(fault),
            // Not an entity reference either
            Ok(None) | Err(_) => {}
        }
    }
    Err(Error::parse(token, TypeDescriptor::Uuid, err.into()))
}
