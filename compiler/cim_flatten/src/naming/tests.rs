use pretty_assertions::assert_eq;

use super::*;

const OUT: &str = "http://example.com/out#";

#[test]
fn derive_without_namespace_keeps_iri() {
    let interner = IriInterner::new();
    let base = Resource::Named(interner.intern("http://iec.ch/TC57/CIM#Breaker"));
    let naming = Naming::default();
    assert!(!naming.rewrites());
    assert_eq!(
        interner.lookup(naming.derive(&interner, base)),
        "http://iec.ch/TC57/CIM#Breaker"
    );
}

#[test]
fn derive_with_namespace_moves_local_name() {
    let interner = IriInterner::new();
    let base = Resource::Named(interner.intern("http://iec.ch/TC57/CIM#Breaker"));
    let naming = Naming::new(Some(OUT.to_owned()));
    assert_eq!(
        interner.lookup(naming.derive(&interner, base)),
        "http://example.com/out#Breaker"
    );
}

#[test]
fn profile_candidate_depends_on_rewriting() {
    let interner = IriInterner::new();
    let base = Resource::Named(interner.intern("http://iec.ch/TC57/CIM#Breaker"));
    let profile = Resource::Named(interner.intern("http://example.com/p#MyBreaker"));

    let plain = Naming::default();
    assert_eq!(
        interner.lookup(plain.derive_for_profile(&interner, base, profile)),
        "http://iec.ch/TC57/CIM#Breaker"
    );

    let rewriting = Naming::new(Some(OUT.to_owned()));
    assert_eq!(
        interner.lookup(rewriting.derive_for_profile(&interner, base, profile)),
        "http://example.com/p#MyBreaker"
    );
}

#[test]
fn qualified_is_stable_and_distinct_per_resource() {
    let interner = IriInterner::new();
    let a = Resource::Named(interner.intern("http://a.example/ns#Switch"));
    let b = Resource::Named(interner.intern("http://b.example/ns#Switch"));
    let naming = Naming::new(Some(OUT.to_owned()));

    assert_eq!(naming.derive(&interner, a), naming.derive(&interner, b));
    assert_eq!(
        naming.qualified(&interner, a, 1),
        naming.qualified(&interner, a, 1)
    );
    assert_ne!(
        naming.qualified(&interner, a, 1),
        naming.qualified(&interner, b, 1)
    );
    assert_ne!(
        naming.qualified(&interner, a, 1),
        naming.qualified(&interner, a, 2)
    );
    assert!(interner
        .lookup(naming.qualified(&interner, a, 1))
        .starts_with("http://example.com/out#Switch_"));
}

#[test]
fn blank_resources_derive_from_their_label() {
    let interner = IriInterner::new();
    let blank = Resource::Blank(3);
    assert_eq!(
        interner.lookup(Naming::default().derive(&interner, blank)),
        "_:b3"
    );
    assert_eq!(
        interner.lookup(Naming::new(Some(OUT.to_owned())).derive(&interner, blank)),
        "http://example.com/out#b3"
    );
}
