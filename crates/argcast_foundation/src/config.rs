//! Configuration for argument coercion.

/// Distances and defaults used when resolving shortcuts.
///
/// The defaults reproduce the classic command behavior: `there` looks up to
/// 50 blocks ahead, entity searches reach 25 blocks with a 1.5 block
/// tolerance, and a bare material name makes a stack of one.
#[derive(Clone, Debug, PartialEq)]
pub struct CoercionConfig {
    /// Maximum distance of the `there` sight-line point.
    pub sight_range: f64,

    /// Maximum distance of an entity search (`that` and location searches).
    pub entity_search_radius: f64,

    /// Lateral tolerance of an entity search.
    pub entity_tolerance: f64,

    /// Amount of a stack built from a bare material name.
    pub default_stack_amount: u32,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            sight_range: 50.0,
            entity_search_radius: 25.0,
            entity_tolerance: 1.5,
            default_stack_amount: 1,
        }
    }
}

impl CoercionConfig {
    /// Creates a configuration with tighter reach, for crowded worlds.
    #[must_use]
    pub fn close_range() -> Self {
        Self {
            sight_range: 10.0,
            entity_search_radius: 5.0,
            entity_tolerance: 0.5,
            default_stack_amount: 1,
        }
    }

    /// Builder method to set the sight range.
    #[must_use]
    pub fn with_sight_range(mut self, range: f64) -> Self {
        self.sight_range = range;
        self
    }

    /// Builder method to set the entity search radius.
    #[must_use]
    pub fn with_entity_search_radius(mut self, radius: f64) -> Self {
        self.entity_search_radius = radius;
        self
    }

    /// Builder method to set the entity search tolerance.
    #[must_use]
    pub fn with_entity_tolerance(mut self, tolerance: f64) -> Self {
        self.entity_tolerance = tolerance;
        self
    }

    /// Builder method to set the default stack amount.
    #[must_use]
    pub fn with_default_stack_amount(mut self, amount: u32) -> Self {
        self.default_stack_amount = amount;
        self
    }
}
