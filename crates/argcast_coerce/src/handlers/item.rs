//! Materials, material data and item stacks.

use std::num::ParseIntError;

use argcast_foundation::{
    Error, ItemStack, Material, MaterialData, ParseFailure, Reference, Result, TypeDescriptor,
};
use tracing::trace;

use crate::coercer::Coercer;
use crate::context::InvocationContext;

/// Fuzzy material match. No match is `None`, not an error.
pub(crate) fn material(coercer: &Coercer<'_>, token: &str) -> Option<Material> {
    coercer.materials.match_material(token)
}

/// `kind:data`, split on the first `:`.
pub(crate) fn material_data(coercer: &Coercer<'_>, token: &str) -> Result<MaterialData> {
    let (kind, data) = token.split_once(':').ok_or_else(|| {
        Error::parse(
            token,
            TypeDescriptor::MaterialData,
            ParseFailure::MissingSeparator(':'),
        )
    })?;
    let data: i8 = data
        .parse()
        .map_err(|err: ParseIntError| Error::parse(data, TypeDescriptor::MaterialData, err.into()))?;
    Ok(MaterialData::new(required_material(coercer, kind)?, data))
}

/// `this` is the subject's held item; anything else is a material name.
pub(crate) fn item_stack(
    coercer: &Coercer<'_>,
    token: &str,
    ctx: Option<&InvocationContext>,
) -> Result<ItemStack> {
    if token.eq_ignore_ascii_case("this") {
        if let Some(subject) = ctx.and_then(InvocationContext::subject_entity) {
            if let Some(held) = coercer.resolver.held_item(subject)? {
                trace!(%subject, "item stack from held item");
                return Ok(held);
            }
        }
    }

    let material = required_material(coercer, token)?;
    Ok(ItemStack::new(material, coercer.config.default_stack_amount))
}

fn required_material(coercer: &Coercer<'_>, name: &str) -> Result<Material> {
    material(coercer, name).ok_or_else(|| Error::not_found(Reference::Material, name))
}
