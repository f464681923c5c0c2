//! Entity classes and comma separated class lists.

use argcast_foundation::{EntityClass, Result};

use crate::coercer::Coercer;

pub(crate) fn entity_class(coercer: &Coercer<'_>, token: &str) -> Result<EntityClass> {
    coercer.classes.resolve(token)
}

/// Each comma separated piece is resolved as is, without trimming.
/// Trailing empty pieces are dropped, unless nothing else is left.
pub(crate) fn entity_class_list(coercer: &Coercer<'_>, token: &str) -> Result<Vec<EntityClass>> {
    let list = match token.trim_end_matches(',') {
        "" => token,
        trimmed => trimmed,
    };
    list.split(',')
        .map(|piece| coercer.classes.resolve(piece))
        .collect()
}
