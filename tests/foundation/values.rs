//! Integration tests for descriptors, values and domain types

use argcast_foundation::enums::{GAME_MODE, MAIN_HAND};
use argcast_foundation::{
    CoercedValue, CoercionConfig, Difficulty, EntityClass, EntityId, EntityRef, GameMode,
    ItemStack, Location, Material, MaterialData, TypeDescriptor, WorldRef,
};
use uuid::Uuid;

fn world() -> WorldRef {
    WorldRef::new("world", Uuid::from_u128(1))
}

// =============================================================================
// Descriptors
// =============================================================================

#[test]
fn primitive_descriptors() {
    for descriptor in [
        TypeDescriptor::Byte,
        TypeDescriptor::Short,
        TypeDescriptor::Int,
        TypeDescriptor::Long,
        TypeDescriptor::Float,
        TypeDescriptor::Double,
        TypeDescriptor::Bool,
        TypeDescriptor::Char,
    ] {
        assert!(!descriptor.uses_context(), "{descriptor}");
    }
    assert!(!TypeDescriptor::Text.uses_context());
}

#[test]
fn context_descriptors() {
    assert!(TypeDescriptor::Location.uses_context());
    assert!(TypeDescriptor::Entity.uses_context());
    assert!(TypeDescriptor::Uuid.uses_context());
    assert!(TypeDescriptor::ItemStack.uses_context());
    assert!(!TypeDescriptor::Material.uses_context());
    assert!(!TypeDescriptor::EntityClassList.uses_context());
}

#[test]
fn opaque_descriptors_compare_by_name() {
    assert_eq!(TypeDescriptor::opaque("Vector"), TypeDescriptor::opaque("Vector"));
    assert_ne!(TypeDescriptor::opaque("Vector"), TypeDescriptor::opaque("BlockFace"));
}

// =============================================================================
// Coerced Values
// =============================================================================

#[test]
fn value_descriptor_round_trip() {
    let values = [
        CoercedValue::Text("hi".to_string()),
        CoercedValue::Long(5),
        CoercedValue::Enum(MAIN_HAND.member("LEFT").unwrap()),
        CoercedValue::Material(None),
        CoercedValue::GameMode(GameMode::Creative),
        CoercedValue::Entity(None),
        CoercedValue::EntityClassList(vec![]),
    ];
    let descriptors = [
        TypeDescriptor::Text,
        TypeDescriptor::Long,
        TypeDescriptor::Enum(&MAIN_HAND),
        TypeDescriptor::Material,
        TypeDescriptor::GameMode,
        TypeDescriptor::Entity,
        TypeDescriptor::EntityClassList,
    ];
    for (value, descriptor) in values.iter().zip(&descriptors) {
        assert_eq!(&value.descriptor(), descriptor);
    }
}

#[test]
fn absent_values() {
    assert!(CoercedValue::Material(None).is_absent());
    assert!(CoercedValue::Entity(None).is_absent());
    assert!(!CoercedValue::Material(Some(Material::new("STONE"))).is_absent());
    assert!(!CoercedValue::Text(String::new()).is_absent());
    assert_eq!(CoercedValue::Entity(None).to_string(), "null");
}

#[test]
fn value_accessors() {
    assert_eq!(CoercedValue::Byte(-3).as_integer(), Some(-3));
    assert_eq!(CoercedValue::Short(300).as_integer(), Some(300));
    assert_eq!(CoercedValue::Double(1.0).as_integer(), None);
    assert_eq!(CoercedValue::Bool(true).as_bool(), Some(true));
    assert_eq!(CoercedValue::Text("a".into()).as_str(), Some("a"));

    let e = EntityRef::new(EntityId::new(3, 1), Uuid::from_u128(3));
    assert_eq!(CoercedValue::Entity(Some(e)).as_entity(), Some(&e));
    assert_eq!(CoercedValue::Entity(None).as_entity(), None);
}

#[test]
fn class_list_display() {
    let value = CoercedValue::EntityClassList(vec![
        EntityClass::new("entity", "Zombie"),
        EntityClass::new("entity", "Pig"),
    ]);
    assert_eq!(value.to_string(), "[entity.Zombie, entity.Pig]");
}

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn legacy_codes_round_trip() {
    for mode in GameMode::ALL {
        assert_eq!(GameMode::from_legacy_code(mode.legacy_code()), Some(mode));
    }
    for difficulty in Difficulty::ALL {
        assert_eq!(
            Difficulty::from_legacy_code(difficulty.legacy_code()),
            Some(difficulty)
        );
    }
    assert_eq!(GameMode::from_legacy_code(4), None);
    assert_eq!(Difficulty::from_legacy_code(-1), None);
}

#[test]
fn from_member_checks_the_enumeration() {
    let creative = GAME_MODE.member("CREATIVE").unwrap();
    assert_eq!(GameMode::from_member(creative), Some(GameMode::Creative));

    let left = MAIN_HAND.member("LEFT").unwrap();
    assert_eq!(GameMode::from_member(left), None);
    assert_eq!(Difficulty::from_member(creative), None);
}

// =============================================================================
// Domain Types
// =============================================================================

#[test]
fn item_display() {
    let wool = MaterialData::new(Material::new("WOOL"), 14);
    assert_eq!(wool.to_string(), "WOOL:14");
    let stack = ItemStack::new(Material::new("DIAMOND"), 3);
    assert_eq!(stack.to_string(), "3 x DIAMOND");
}

#[test]
fn locations_in_different_worlds() {
    let a = Location::new(world(), 0.0, 0.0, 0.0);
    let b = Location::new(WorldRef::new("world", Uuid::from_u128(2)), 0.0, 0.0, 0.0);
    assert!(!a.same_world(&b));
    assert!(a.same_world(&a.offset([0.0, 1.0, 0.0], 3.0)));
}

#[test]
fn config_presets() {
    let default = CoercionConfig::default();
    assert!((default.sight_range - 50.0).abs() < f64::EPSILON);
    assert_eq!(default.default_stack_amount, 1);

    let close = CoercionConfig::close_range();
    assert!(close.sight_range < default.sight_range);
    assert!(close.entity_search_radius < default.entity_search_radius);

    let custom = CoercionConfig::default()
        .with_entity_search_radius(3.0)
        .with_entity_tolerance(0.25);
    assert!((custom.entity_search_radius - 3.0).abs() < f64::EPSILON);
    assert!((custom.entity_tolerance - 0.25).abs() < f64::EPSILON);
}
