//! Property-based tests for the catalog.
//!
//! Random sequences of registrations and renames over a pool of bases whose
//! local names deliberately clash must keep the base/identifier maps
//! mutual inverses, and must never lose a base.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_possible_truncation,
    reason = "Proptest strategies produce small indices"
)]

use cim_flatten::{Catalog, Naming};
use cim_ir::{IriInterner, Resource};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

const NAMESPACES: [&str; 3] = [
    "http://a.example.com/ns#",
    "http://b.example.com/ns#",
    "http://c.example.com/ns/",
];
const LOCALS: [&str; 3] = ["Name", "Terminal", "P0"];
const OUT: &str = "http://example.com/out#";

#[derive(Clone, Debug)]
enum Op {
    /// Register a base under a named profile from the pool.
    Named { base: usize, profile: usize },
    /// Register a base under an anonymous profile.
    Anon { base: usize, profile: u32 },
    IfAbsent { base: usize },
    Rename { base: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let base = 0..NAMESPACES.len() * LOCALS.len();
    prop_oneof![
        (base.clone(), 0..4usize).prop_map(|(base, profile)| Op::Named { base, profile }),
        (base.clone(), 0..4u32).prop_map(|(base, profile)| Op::Anon { base, profile }),
        base.clone().prop_map(|base| Op::IfAbsent { base }),
        base.prop_map(|base| Op::Rename { base }),
    ]
}

fn bases(interner: &IriInterner) -> Vec<Resource> {
    NAMESPACES
        .iter()
        .flat_map(|ns| LOCALS.iter().map(move |local| format!("{ns}{local}")))
        .map(|iri| Resource::Named(interner.intern(&iri)))
        .collect()
}

/// Named profiles, some of which collide with the bases' fallbacks.
fn profiles(interner: &IriInterner) -> Vec<Resource> {
    ["P0", "P1", "Name", "Terminal"]
        .iter()
        .map(|local| Resource::Named(interner.intern(&format!("{OUT}{local}"))))
        .collect()
}

fn apply(catalog: &mut Catalog<'_>, bases: &[Resource], profiles: &[Resource], op: &Op) {
    match *op {
        Op::Named { base, profile } => catalog.register(bases[base], profiles[profile]),
        Op::Anon { base, profile } => catalog.register(bases[base], Resource::Blank(profile)),
        Op::IfAbsent { base } => {
            catalog.register_if_absent(bases[base]);
        }
        Op::Rename { base } => {
            catalog.rename(bases[base]);
        }
    }
}

fn touched(op: &Op) -> Option<usize> {
    match *op {
        Op::Named { base, .. } | Op::Anon { base, .. } | Op::IfAbsent { base } => Some(base),
        Op::Rename { .. } => None,
    }
}

proptest! {
    #[test]
    fn bijection_holds_after_every_step(
        ops in prop::collection::vec(op_strategy(), 1..40),
        rewrite in any::<bool>(),
    ) {
        let interner = IriInterner::default();
        let naming = Naming::new(rewrite.then(|| OUT.to_owned()));
        let bases = bases(&interner);
        let profiles = profiles(&interner);
        let mut catalog = Catalog::new(&interner, naming);
        let mut registered = FxHashSet::default();

        for op in &ops {
            apply(&mut catalog, &bases, &profiles, op);
            if let Some(base) = touched(op) {
                registered.insert(bases[base]);
            }

            prop_assert_eq!(catalog.check(), Ok(()));
            prop_assert_eq!(catalog.len(), registered.len());
            for &base in &registered {
                let id = catalog.lookup(base);
                prop_assert!(id.is_some());
                prop_assert_eq!(catalog.owner(id.unwrap()), Some(base));
            }
        }
    }

    #[test]
    fn colliding_bases_converge(
        n in 1..=NAMESPACES.len(),
        order in any::<u64>(),
        claim in any::<bool>(),
    ) {
        let interner = IriInterner::default();
        let mut catalog = Catalog::new(&interner, Naming::new(Some(OUT.to_owned())));
        let colliding: Vec<Resource> = NAMESPACES[..n]
            .iter()
            .map(|ns| Resource::Named(interner.intern(&format!("{ns}Name"))))
            .collect();
        // Every named claim targets the identifier all the bases fall back to.
        let contested = Resource::Named(interner.intern(&format!("{OUT}Name")));

        for &base in &colliding {
            if claim {
                catalog.register(base, contested);
            } else {
                prop_assert!(catalog.register_if_absent(base));
                prop_assert!(!catalog.register_if_absent(base));
            }
        }

        let distinct = |catalog: &Catalog<'_>| {
            colliding
                .iter()
                .filter_map(|&base| catalog.lookup(base))
                .collect::<FxHashSet<_>>()
                .len()
        };
        prop_assert_eq!(distinct(&catalog), n);

        let start = (order % n as u64) as usize;
        for step in 0..n {
            let moved = catalog.rename(colliding[(start + step) % n]);
            prop_assert!(moved <= n);
            prop_assert_eq!(distinct(&catalog), n);
            prop_assert_eq!(catalog.check(), Ok(()));
        }
    }

    #[test]
    fn single_rename_is_bounded(
        ops in prop::collection::vec(op_strategy(), 1..30),
        victim in 0..NAMESPACES.len() * LOCALS.len(),
    ) {
        let interner = IriInterner::default();
        let bases = bases(&interner);
        let profiles = profiles(&interner);
        let mut catalog = Catalog::new(&interner, Naming::new(Some(OUT.to_owned())));
        for op in &ops {
            apply(&mut catalog, &bases, &profiles, op);
        }

        let before = catalog.len();
        let moved = catalog.rename(bases[victim]);
        prop_assert!(moved <= before);
        prop_assert_eq!(catalog.len(), before);
        prop_assert_eq!(catalog.check(), Ok(()));
    }
}
