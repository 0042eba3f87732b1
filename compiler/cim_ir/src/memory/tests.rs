#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;

const CIM: &str = "http://iec.ch/TC57/CIM#";

fn cim(local: &str) -> String {
    format!("{CIM}{local}")
}

#[test]
fn super_classes_are_transitive_and_exclude_self() {
    let mut b = MemoryOntology::builder();
    let breaker = b.class(&cim("Breaker"));
    let switch = b.class(&cim("Switch"));
    let equipment = b.class(&cim("ConductingEquipment"));
    b.sub_class_of(breaker, switch);
    b.sub_class_of(switch, equipment);
    b.sub_class_of(equipment, breaker); // cycle back to the start
    let model = b.build();

    let mut supers = model.super_classes(breaker).unwrap();
    supers.sort();
    let mut expected = vec![switch, equipment];
    expected.sort();
    assert_eq!(supers, expected);
}

#[test]
fn named_profiles_are_roots_and_anonymous_are_not() {
    let mut b = MemoryOntology::builder();
    let base = b.class(&cim("Breaker"));
    let named = b.profile("http://example.com/p#Breaker", Some(base));
    let anon = b.anon_profile(Some(base));
    let model = b.build();

    assert_eq!(model.profile_classes().unwrap(), vec![named]);
    assert_eq!(model.base_class(anon).unwrap(), Some(base));
    assert!(anon.is_anon());
}

#[test]
fn property_declarations_keep_order() {
    let mut b = MemoryOntology::builder();
    let base = b.class(&cim("Breaker"));
    let profile = b.profile("http://example.com/p#Breaker", Some(base));
    let name = b.datatype_property(&cim("IdentifiedObject.name"), None);
    let open = b.datatype_property(&cim("Switch.open"), None);
    b.declare(PropertyInfo::new(name, profile).required());
    b.declare(PropertyInfo::new(open, profile));
    let model = b.build();

    assert_eq!(model.properties(profile).unwrap(), vec![name, open]);
    assert!(model.property_info(profile, name).unwrap().required);
    assert!(model.is_datatype_property(open).unwrap());
}

#[test]
fn undeclared_property_info_is_malformed() {
    let mut b = MemoryOntology::builder();
    let profile = b.profile("http://example.com/p#Breaker", None);
    let other = b.object_property(&cim("Switch.Terminals"), None);
    let model = b.build();

    let err = model.property_info(profile, other).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn unknown_profile_is_reported() {
    let mut b = MemoryOntology::builder();
    let stray = b.resource("http://example.com/p#Nowhere");
    let model = b.build();

    assert_eq!(
        model.base_class(stray).unwrap_err(),
        StoreError::UnknownResource {
            resource: "http://example.com/p#Nowhere".to_owned()
        }
    );
}

#[test]
fn poisoned_resource_fails_queries() {
    let mut b = MemoryOntology::builder();
    let base = b.class(&cim("Breaker"));
    b.poison(base);
    let model = b.build();

    assert!(matches!(
        model.super_classes(base),
        Err(StoreError::Backend(_))
    ));
    assert!(matches!(model.label(base), Err(StoreError::Backend(_))));
}

#[test]
fn inverse_is_symmetric() {
    let mut b = MemoryOntology::builder();
    let a = b.object_property(&cim("Terminal.ConductingEquipment"), None);
    let c = b.object_property(&cim("ConductingEquipment.Terminals"), None);
    b.inverse(a, c);
    let model = b.build();

    assert_eq!(model.inverse_of(a).unwrap(), Some(c));
    assert_eq!(model.inverse_of(c).unwrap(), Some(a));
    assert!(!model.is_datatype_property(a).unwrap());
}

#[test]
fn annotations_round_out_resources() {
    let mut b = MemoryOntology::builder();
    let base = b.class(&cim("Breaker"));
    let package = b.resource(&cim("Package_Wires"));
    let stereo = b.resource("http://langdale.com.au/2005/UML#concrete");
    b.label(base, "Breaker")
        .comment(base, "A mechanical switching device.")
        .stereotype(base, stereo)
        .defined_by(base, package);
    let model = b.build();

    assert_eq!(model.label(base).unwrap().as_deref(), Some("Breaker"));
    assert_eq!(
        model.comment(base).unwrap().as_deref(),
        Some("A mechanical switching device.")
    );
    assert_eq!(model.stereotypes(base).unwrap(), vec![stereo]);
    assert_eq!(model.defined_by(base).unwrap(), Some(package));
    assert_eq!(model.defined_by(package).unwrap(), None);
}
