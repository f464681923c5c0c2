//! Integration tests for the game-domain handlers without an environment

use argcast_coerce::{Coercer, Detached, InvocationContext, coerce_all};
use argcast_foundation::{
    CoercedValue, Difficulty, EntityClass, ErrorKind, GameMode, ItemStack, Material,
    MaterialData, ParseFailure, Reference, TypeDescriptor,
};
use uuid::Uuid;

// =============================================================================
// Materials and Items
// =============================================================================

#[test]
fn material() {
    let types = vec![TypeDescriptor::Material; 3];
    let input = ["gold_block", "DIAMOND_SWORD", "blaze_ROD"];

    let output = coerce_all(&Detached, &types, &input, None).unwrap();
    assert_eq!(
        output,
        [
            CoercedValue::Material(Some(Material::new("GOLD_BLOCK"))),
            CoercedValue::Material(Some(Material::new("DIAMOND_SWORD"))),
            CoercedValue::Material(Some(Material::new("BLAZE_ROD"))),
        ]
    );
}

#[test]
fn unknown_material_is_absent_not_error() {
    let output = coerce_all(&Detached, &[TypeDescriptor::Material], &["unobtainium"], None).unwrap();
    assert!(output[0].is_absent());
}

#[test]
fn material_by_legacy_id() {
    let output = coerce_all(&Detached, &[TypeDescriptor::Material], &["264"], None).unwrap();
    assert_eq!(output[0], CoercedValue::Material(Some(Material::new("DIAMOND"))));
}

#[test]
fn item_stack() {
    let output = coerce_all(&Detached, &[TypeDescriptor::ItemStack], &["diamond"], None).unwrap();
    assert_eq!(
        output[0].as_item_stack(),
        Some(&ItemStack::new(Material::new("DIAMOND"), 1))
    );
}

#[test]
fn item_stack_unknown_material() {
    let err = coerce_all(&Detached, &[TypeDescriptor::ItemStack], &["unobtainium"], None)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ReferenceNotFound {
            reference: Reference::Material,
            ..
        }
    ));
}

#[test]
fn material_data() {
    let output =
        coerce_all(&Detached, &[TypeDescriptor::MaterialData], &["diamond_spade:24"], None).unwrap();
    assert_eq!(
        output[0],
        CoercedValue::MaterialData(MaterialData::new(Material::new("DIAMOND_SPADE"), 24))
    );
}

#[test]
fn material_data_needs_separator() {
    let err = coerce_all(&Detached, &[TypeDescriptor::MaterialData], &["diamond_spade"], None)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Parse {
            cause: ParseFailure::MissingSeparator(':'),
            ..
        }
    ));
}

// =============================================================================
// Game Mode and Difficulty
// =============================================================================

#[test]
fn game_mode() {
    let types = vec![TypeDescriptor::GameMode; 2];
    let output = coerce_all(&Detached, &types, &["1", "adventure"], None).unwrap();
    assert_eq!(
        output,
        [
            CoercedValue::GameMode(GameMode::Creative),
            CoercedValue::GameMode(GameMode::Adventure),
        ]
    );
}

#[test]
fn difficulty() {
    let types = vec![TypeDescriptor::Difficulty; 2];
    let output = coerce_all(&Detached, &types, &["3", "peaceful"], None).unwrap();
    assert_eq!(
        output,
        [
            CoercedValue::Difficulty(Difficulty::Hard),
            CoercedValue::Difficulty(Difficulty::Peaceful),
        ]
    );
}

// =============================================================================
// Entity Classes
// =============================================================================

#[test]
fn entity_classes() {
    let output = coerce_all(
        &Detached,
        &[TypeDescriptor::EntityClassList],
        &["Zombie,Creeper,Pig"],
        None,
    )
    .unwrap();
    assert_eq!(
        output[0],
        CoercedValue::EntityClassList(vec![
            EntityClass::new("entity", "Zombie"),
            EntityClass::new("entity", "Creeper"),
            EntityClass::new("entity", "Pig"),
        ])
    );
}

#[test]
fn minecart_and_projectile_namespaces() {
    let types = vec![TypeDescriptor::EntityClass; 2];
    let output = coerce_all(&Detached, &types, &["snowball", "Minecart"], None).unwrap();
    assert_eq!(
        output[0],
        CoercedValue::EntityClass(EntityClass::new("entity.projectile", "Snowball"))
    );
    assert!(matches!(output[1], CoercedValue::EntityClass(_)));
}

#[test]
fn bad_class_is_named() {
    let err = coerce_all(
        &Detached,
        &[TypeDescriptor::EntityClassList],
        &["Zombie,Dragon"],
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Dragon"));
}

// =============================================================================
// Context Shortcuts Without an Environment
// =============================================================================

#[test]
fn shortcuts_without_context_are_parse_errors() {
    for (descriptor, token) in [
        (TypeDescriptor::Location, "here"),
        (TypeDescriptor::Location, "there"),
        (TypeDescriptor::Entity, "me"),
        (TypeDescriptor::Entity, "that"),
        (TypeDescriptor::Uuid, "me"),
    ] {
        let err = coerce_all(&Detached, &[descriptor.clone()], &[token], None).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Parse { .. }),
            "{descriptor} {token}: {err}"
        );
    }
}

#[test]
fn console_context_does_not_resolve_shortcuts() {
    let ctx = InvocationContext::console();
    let err = Coercer::new(&Detached)
        .coerce_all(&[TypeDescriptor::Location], &["here"], Some(&ctx))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { .. }));
}

#[test]
fn literal_location_needs_a_known_world() {
    let err = coerce_all(&Detached, &[TypeDescriptor::Location], &["world,1,2,3"], None)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ReferenceNotFound {
            reference: Reference::World,
            ..
        }
    ));
}

#[test]
fn canonical_uuid() {
    let text = "c8d7a1b9-3c1d-4d8a-9f43-7b1f0c2e5a66";
    let output = coerce_all(&Detached, &[TypeDescriptor::Uuid], &[text], None).unwrap();
    assert_eq!(output[0], CoercedValue::Uuid(Uuid::parse_str(text).unwrap()));
}
