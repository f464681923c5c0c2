//! Entity class namespaces searched by normalized name.
//!
//! A [`ClassRegistry`] is an ordered list of [`ClassNamespace`]s built once
//! at initialization. A lookup normalizes the input, then asks each
//! namespace in turn; the first namespace that knows the name wins.

use std::sync::LazyLock;

use argcast_foundation::{EntityClass, Error, ParseFailure, Reference, Result, TypeDescriptor};

/// A named group of entity classes.
#[derive(Clone, Debug)]
pub struct ClassNamespace {
    /// Namespace name, recorded on resolved classes.
    pub name: &'static str,
    /// Simple class names defined in this namespace.
    pub classes: &'static [&'static str],
}

impl ClassNamespace {
    /// Creates a namespace.
    #[must_use]
    pub const fn new(name: &'static str, classes: &'static [&'static str]) -> Self {
        Self { name, classes }
    }

    /// Finds the class whose normalized name equals `normalized`.
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<EntityClass> {
        self.classes
            .iter()
            .find(|class| normalize(class) == normalized)
            .map(|class| EntityClass::new(self.name, *class))
    }
}

/// Normalizes a class name: first letter upper case, the rest lower case,
/// without a trailing `.class` marker.
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        normalized.extend(first.to_uppercase());
        normalized.push_str(&chars.as_str().to_lowercase());
    }
    if normalized.ends_with(".class") {
        normalized.truncate(normalized.len() - ".class".len());
    }
    normalized
}

/// Ordered namespaces for class lookup.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    namespaces: Vec<ClassNamespace>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared built-in registry: `entity`, then
    /// `entity.minecart`, then `entity.projectile`.
    #[must_use]
    pub fn standard() -> &'static ClassRegistry {
        &STANDARD
    }

    /// Appends a namespace; earlier namespaces take precedence.
    #[must_use]
    pub fn with_namespace(mut self, namespace: ClassNamespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// The namespaces in search order.
    #[must_use]
    pub fn namespaces(&self) -> &[ClassNamespace] {
        &self.namespaces
    }

    /// Resolves one class name.
    ///
    /// An empty name is a parse error; a name no namespace knows is a
    /// reference error naming the normalized input.
    pub fn resolve(&self, name: &str) -> Result<EntityClass> {
        if name.is_empty() {
            return Err(Error::parse(
                name,
                TypeDescriptor::EntityClass,
                ParseFailure::Empty,
            ));
        }

        let normalized = normalize(name);
        self.namespaces
            .iter()
            .find_map(|namespace| namespace.lookup(&normalized))
            .ok_or_else(|| Error::not_found(Reference::EntityClass, normalized))
    }
}

static STANDARD: LazyLock<ClassRegistry> = LazyLock::new(|| {
    ClassRegistry::new()
        .with_namespace(ClassNamespace::new("entity", ENTITY_CLASSES))
        .with_namespace(ClassNamespace::new("entity.minecart", MINECART_CLASSES))
        .with_namespace(ClassNamespace::new("entity.projectile", PROJECTILE_CLASSES))
});

const ENTITY_CLASSES: &[&str] = &[
    "Bat",
    "Blaze",
    "Boat",
    "CaveSpider",
    "Chicken",
    "Cow",
    "Creeper",
    "Donkey",
    "Enderman",
    "Endermite",
    "Ghast",
    "Giant",
    "Guardian",
    "Horse",
    "Husk",
    "IronGolem",
    "Item",
    "Llama",
    "MagmaCube",
    "Minecart",
    "Mule",
    "Ocelot",
    "Parrot",
    "Pig",
    "PigZombie",
    "Player",
    "PolarBear",
    "Rabbit",
    "Sheep",
    "Shulker",
    "Silverfish",
    "Skeleton",
    "Slime",
    "Snowman",
    "Spider",
    "Squid",
    "Stray",
    "Vex",
    "Villager",
    "Witch",
    "Wither",
    "Wolf",
    "Zombie",
];

const MINECART_CLASSES: &[&str] = &[
    "CommandMinecart",
    "ExplosiveMinecart",
    "HopperMinecart",
    "PoweredMinecart",
    "RideableMinecart",
    "SpawnerMinecart",
    "StorageMinecart",
];

const PROJECTILE_CLASSES: &[&str] = &[
    "Arrow",
    "Egg",
    "EnderPearl",
    "Fireball",
    "LlamaSpit",
    "ShulkerBullet",
    "SmallFireball",
    "Snowball",
    "SpectralArrow",
    "ThrownPotion",
    "TippedArrow",
    "WitherSkull",
];
