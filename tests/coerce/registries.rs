//! Integration tests for custom material and class registries

use argcast_coerce::classes::normalize as normalize_class;
use argcast_coerce::materials::normalize as normalize_material;
use argcast_coerce::{
    ClassNamespace, ClassRegistry, Coercer, Detached, MaterialRegistry, MaterialTable,
};
use argcast_foundation::{CoercedValue, EntityClass, Material, TypeDescriptor};

// =============================================================================
// Materials
// =============================================================================

#[test]
fn material_normalization() {
    assert_eq!(normalize_material("diamond spade"), "DIAMOND_SPADE");
    assert_eq!(normalize_material("minecraft:gold_block"), "GOLD_BLOCK");
    assert_eq!(normalize_material("blaze   rod"), "BLAZE_ROD");
    assert_eq!(normalize_material("red-stone"), "REDSTONE");
}

#[test]
fn standard_table_is_populated() {
    let table = MaterialTable::standard();
    assert!(!table.is_empty());
    assert_eq!(
        table.match_material("Diamond Sword"),
        Some(Material::new("DIAMOND_SWORD"))
    );
    assert_eq!(table.match_material("276"), Some(Material::new("DIAMOND_SWORD")));
    assert_eq!(table.match_material("99999"), None);
}

/// Only knows one made-up material.
struct Mithril;

impl MaterialRegistry for Mithril {
    fn match_material(&self, name: &str) -> Option<Material> {
        (normalize_material(name) == "MITHRIL").then(|| Material::new("MITHRIL"))
    }
}

#[test]
fn custom_material_registry() {
    let coercer = Coercer::new(&Detached).with_materials(&Mithril);
    let types = [TypeDescriptor::Material, TypeDescriptor::Material];
    let output = coercer.coerce_all(&types, &["mithril", "diamond"], None).unwrap();
    assert_eq!(output[0], CoercedValue::Material(Some(Material::new("MITHRIL"))));
    assert!(output[1].is_absent());
}

#[test]
fn extended_table() {
    let table = MaterialTable::new()
        .with("copper ingot", Some(1001))
        .with("amethyst_shard", None);
    assert_eq!(table.len(), 2);

    let coercer = Coercer::new(&Detached).with_materials(&table);
    let output = coercer
        .coerce_all(
            &[TypeDescriptor::MaterialData, TypeDescriptor::ItemStack],
            &["1001:2", "Amethyst Shard"],
            None,
        )
        .unwrap();
    assert_eq!(output[0].to_string(), "COPPER_INGOT:2");
    assert_eq!(output[1].to_string(), "1 x AMETHYST_SHARD");
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn class_normalization() {
    assert_eq!(normalize_class("zombie"), "Zombie");
    assert_eq!(normalize_class("PIG.class"), "Pig");
    assert_eq!(normalize_class("pig.CLASS"), "Pig");
    assert_eq!(normalize_class(""), "");
}

#[test]
fn standard_registry_search_order() {
    let names: Vec<_> = ClassRegistry::standard()
        .namespaces()
        .iter()
        .map(|ns| ns.name)
        .collect();
    assert_eq!(names, ["entity", "entity.minecart", "entity.projectile"]);
}

#[test]
fn custom_class_registry() {
    const CREATURES: &[&str] = &["Griffin", "Wyvern"];
    let registry = ClassRegistry::new().with_namespace(ClassNamespace::new("bestiary", CREATURES));
    let coercer = Coercer::new(&Detached).with_classes(&registry);

    let output = coercer
        .coerce_all(&[TypeDescriptor::EntityClassList], &["griffin,WYVERN"], None)
        .unwrap();
    assert_eq!(
        output[0],
        CoercedValue::EntityClassList(vec![
            EntityClass::new("bestiary", "Griffin"),
            EntityClass::new("bestiary", "Wyvern"),
        ])
    );
}
