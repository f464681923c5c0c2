//! The dispatcher.
//!
//! [`Coercer::coerce_all`] walks the tokens in order and hands each
//! (descriptor, token) pair to the matching handler. The first failure
//! aborts the batch; the error carries the failing index, token and type.

use argcast_foundation::{
    CoercedValue, CoercionConfig, Error, ErrorContext, Result, TypeDescriptor,
};
use tracing::debug;

use crate::classes::ClassRegistry;
use crate::context::{ContextResolver, InvocationContext};
use crate::handlers::{class, entity, enumeration, item, location, scalar};
use crate::materials::{MaterialRegistry, MaterialTable};

/// Coerces raw string tokens into typed values.
///
/// A coercer borrows its environment and registries; it holds no mutable
/// state, so one instance can serve any number of calls.
pub struct Coercer<'a> {
    pub(crate) resolver: &'a dyn ContextResolver,
    pub(crate) materials: &'a dyn MaterialRegistry,
    pub(crate) classes: &'a ClassRegistry,
    pub(crate) config: CoercionConfig,
}

impl<'a> Coercer<'a> {
    /// Creates a coercer over `resolver` with the built-in registries and
    /// the default configuration.
    #[must_use]
    pub fn new(resolver: &'a dyn ContextResolver) -> Self {
        Self {
            resolver,
            materials: MaterialTable::standard(),
            classes: ClassRegistry::standard(),
            config: CoercionConfig::default(),
        }
    }

    /// Replaces the material registry.
    #[must_use]
    pub fn with_materials(mut self, materials: &'a dyn MaterialRegistry) -> Self {
        self.materials = materials;
        self
    }

    /// Replaces the class registry.
    #[must_use]
    pub fn with_classes(mut self, classes: &'a ClassRegistry) -> Self {
        self.classes = classes;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CoercionConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Coerces every token into the type at the same index.
    ///
    /// An empty token list returns immediately without consulting `types`
    /// or `ctx`. Extra descriptors beyond the last token are ignored; fewer
    /// descriptors than tokens is an arity error. `ctx` is only handed to
    /// descriptors whose coercion may consult it.
    ///
    /// # Errors
    ///
    /// Returns the first element failure, annotated with an
    /// [`ErrorContext`]. No partial output is ever returned.
    pub fn coerce_all<S: AsRef<str>>(
        &self,
        types: &[TypeDescriptor],
        tokens: &[S],
        ctx: Option<&InvocationContext>,
    ) -> Result<Vec<CoercedValue>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        if types.len() < tokens.len() {
            return Err(Error::arity_mismatch(types.len(), tokens.len()));
        }

        tokens
            .iter()
            .zip(types)
            .enumerate()
            .map(|(index, (token, descriptor))| {
                let token = token.as_ref();
                let ctx = ctx.filter(|_| descriptor.uses_context());
                debug!(index, target = %descriptor, "coercing argument");
                self.coerce_one(descriptor, token, ctx).map_err(|err| {
                    debug!(index, target = %descriptor, error = %err.kind, "argument rejected");
                    err.with_context(ErrorContext::new(index, token, descriptor.clone()))
                })
            })
            .collect()
    }

    /// Coerces a single token.
    ///
    /// # Errors
    ///
    /// - `UnsupportedType` for [`TypeDescriptor::Opaque`]
    /// - `Parse` for malformed literals
    /// - `ReferenceNotFound` for unknown worlds, materials or classes
    pub fn coerce_one(
        &self,
        descriptor: &TypeDescriptor,
        token: &str,
        ctx: Option<&InvocationContext>,
    ) -> Result<CoercedValue> {
        let value = match descriptor {
            // Composite types
            TypeDescriptor::Material => CoercedValue::Material(item::material(self, token)),
            TypeDescriptor::MaterialData => {
                CoercedValue::MaterialData(item::material_data(self, token)?)
            }
            TypeDescriptor::ItemStack => CoercedValue::ItemStack(item::item_stack(self, token, ctx)?),
            TypeDescriptor::Location => {
                CoercedValue::Location(location::location(self, token, ctx)?)
            }
            TypeDescriptor::Entity => CoercedValue::Entity(entity::entity(self, token, ctx)?),
            TypeDescriptor::Uuid => CoercedValue::Uuid(entity::uuid(self, token, ctx)?),
            TypeDescriptor::GameMode => CoercedValue::GameMode(enumeration::game_mode(token)?),
            TypeDescriptor::Difficulty => {
                CoercedValue::Difficulty(enumeration::difficulty(token)?)
            }
            TypeDescriptor::EntityClass => {
                CoercedValue::EntityClass(class::entity_class(self, token)?)
            }
            TypeDescriptor::EntityClassList => {
                CoercedValue::EntityClassList(class::entity_class_list(self, token)?)
            }

            // Primitive scalars
            TypeDescriptor::Text => CoercedValue::Text(token.to_string()),
            TypeDescriptor::Byte => CoercedValue::Byte(scalar::integer(descriptor, token)?),
            TypeDescriptor::Short => CoercedValue::Short(scalar::integer(descriptor, token)?),
            TypeDescriptor::Int => CoercedValue::Int(scalar::integer(descriptor, token)?),
            TypeDescriptor::Long => CoercedValue::Long(scalar::integer(descriptor, token)?),
            TypeDescriptor::Float => CoercedValue::Float(scalar::float(descriptor, token)?),
            TypeDescriptor::Double => CoercedValue::Double(scalar::float(descriptor, token)?),
            TypeDescriptor::Bool => CoercedValue::Bool(scalar::boolean(token)),
            TypeDescriptor::Char => CoercedValue::Char(scalar::character(token)?),

            // Generic enumerations
            TypeDescriptor::Enum(def) => CoercedValue::Enum(enumeration::member(def, token)?),

            TypeDescriptor::Opaque(_) => return Err(Error::unsupported(descriptor.clone())),
        };
        Ok(value)
    }
}

/// Coerces `tokens` with the built-in registries and default configuration.
///
/// # Errors
///
/// See [`Coercer::coerce_all`].
pub fn coerce_all<S: AsRef<str>>(
    resolver: &dyn ContextResolver,
    types: &[TypeDescriptor],
    tokens: &[S],
    ctx: Option<&InvocationContext>,
) -> Result<Vec<CoercedValue>> {
    Coercer::new(resolver).coerce_all(types, tokens, ctx)
}
