//! Base class registry.
//!
//! The catalog maps every base class that survives into the output schema to
//! exactly one canonical identifier, and every identifier back to exactly one
//! base. The two maps are mutual inverses between any two public calls.
//!
//! # Collisions
//!
//! Two bases can want the same identifier:
//!
//! - a named profile claims an identifier another base already holds, or
//! - two bases from different namespaces share a local name under the
//!   output namespace.
//!
//! The first case evicts the current owner, which is renamed to its
//! *fallback* (the identifier derived from its own identity). A renamed base
//! may in turn evict the next owner, and so on. A base whose fallback is
//! held by another base deriving the very same fallback (the second case)
//! takes a qualified identifier instead, so two bases never fight over one
//! name. Each base moves at most once per cascade.

use cim_ir::{FxIndexMap, Iri, IriInterner, Resource};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::naming::Naming;

/// Pending rebinds of one rename cascade, outermost first.
type Cascade = SmallVec<[(Resource, Iri); 4]>;

/// Bidirectional base class ↔ identifier registry.
pub struct Catalog<'i> {
    interner: &'i IriInterner,
    naming: Naming,
    /// Base class → identifier, in registration order.
    classes: FxIndexMap<Resource, Iri>,
    /// Identifier → base class.
    owners: FxHashMap<Iri, Resource>,
    /// Base class → every profile registered against it.
    profiles: FxIndexMap<Resource, Vec<Resource>>,
}

impl<'i> Catalog<'i> {
    pub fn new(interner: &'i IriInterner, naming: Naming) -> Self {
        Catalog {
            interner,
            naming,
            classes: FxIndexMap::default(),
            owners: FxHashMap::default(),
            profiles: FxIndexMap::default(),
        }
    }

    /// Register `base` as specialized by `profile`.
    ///
    /// An anonymous profile only guarantees that `base` has some identifier.
    /// A named profile binds `base` to the identifier derived from the
    /// profile, evicting whichever base currently holds it.
    pub fn register(&mut self, base: Resource, profile: Resource) {
        if profile.is_anon() {
            self.register_if_absent(base);
        } else {
            let candidate = self
                .naming
                .derive_for_profile(self.interner, base, profile);
            self.bind_identifier(base, candidate);
        }

        let seen = self.profiles.entry(base).or_default();
        if !seen.contains(&profile) {
            seen.push(profile);
        }
    }

    /// Register `base` under its fallback identifier unless it already has
    /// one. Returns `true` if a new entry was created.
    pub fn register_if_absent(&mut self, base: Resource) -> bool {
        if self.classes.contains_key(&base) {
            return false;
        }
        let fallback = self.fallback(base);
        match self.owners.get(&fallback) {
            Some(&owner) if self.rightfully_holds(owner, fallback) => {
                let id = self.vacant_qualified(base, None, &Cascade::new());
                tracing::trace!(
                    base = %base.render(self.interner),
                    id = self.interner.lookup(id),
                    "fallback taken, registering qualified identifier"
                );
                self.install(base, id);
            }
            _ => self.bind_identifier(base, fallback),
        }
        true
    }

    /// Bind `base` to `id`, renaming the current owner of `id` first.
    pub fn bind_identifier(&mut self, base: Resource, id: Iri) {
        let owner = self.owners.get(&id).copied();
        if owner == Some(base) {
            return;
        }
        if let Some(&old) = self.classes.get(&base) {
            self.owners.remove(&old);
        }
        if let Some(owner) = owner {
            self.relocate(owner, Some(id));
        }
        self.install(base, id);
    }

    /// Move `base` back to its fallback identifier, cascading through any
    /// base that holds it. Returns the number of bases rebound.
    pub fn rename(&mut self, base: Resource) -> usize {
        self.relocate(base, None)
    }

    /// Rename cascade. `reserved` is an identifier being claimed by the
    /// caller, which no base in the cascade may take.
    fn relocate(&mut self, start: Resource, reserved: Option<Iri>) -> usize {
        let mut visited = FxHashSet::default();
        let mut cascade = Cascade::new();
        let mut next = Some(start);

        while let Some(base) = next.take() {
            if !visited.insert(base) {
                break;
            }
            let Some(&current) = self.classes.get(&base) else {
                break;
            };
            let target = self.rename_target(base, reserved, &cascade);
            if target == current {
                break;
            }
            if self.owners.get(&current) == Some(&base) {
                self.owners.remove(&current);
            }
            next = self.owners.get(&target).copied();
            tracing::trace!(
                base = %base.render(self.interner),
                from = self.interner.lookup(current),
                to = self.interner.lookup(target),
                "renaming base class"
            );
            cascade.push((base, target));
        }

        let moved = cascade.len();
        // Innermost first: each target was freed by the step after it.
        while let Some((base, id)) = cascade.pop() {
            self.install(base, id);
        }
        moved
    }

    /// Where a renamed base goes: its fallback, or a qualified identifier
    /// when the fallback is unavailable.
    fn rename_target(&self, base: Resource, reserved: Option<Iri>, cascade: &Cascade) -> Iri {
        let fallback = self.fallback(base);
        let blocked = Some(fallback) == reserved
            || cascade.iter().any(|&(_, id)| id == fallback)
            || self
                .owners
                .get(&fallback)
                .is_some_and(|&owner| owner != base && self.rightfully_holds(owner, fallback));
        if blocked {
            self.vacant_qualified(base, reserved, cascade)
        } else {
            fallback
        }
    }

    /// First qualified identifier for `base` nobody else holds or claims.
    fn vacant_qualified(&self, base: Resource, reserved: Option<Iri>, cascade: &Cascade) -> Iri {
        let mut attempt = 1;
        loop {
            let id = self.naming.qualified(self.interner, base, attempt);
            let free = Some(id) != reserved
                && !cascade.iter().any(|&(_, claimed)| claimed == id)
                && self.owners.get(&id).map_or(true, |&owner| owner == base);
            if free {
                return id;
            }
            attempt += 1;
        }
    }

    fn install(&mut self, base: Resource, id: Iri) {
        self.classes.insert(base, id);
        self.owners.insert(id, base);
    }

    /// The identifier `base` derives from its own identity.
    pub fn fallback(&self, base: Resource) -> Iri {
        self.naming.derive(self.interner, base)
    }

    fn rightfully_holds(&self, owner: Resource, id: Iri) -> bool {
        self.fallback(owner) == id
    }

    /// Canonical identifier of `base`.
    pub fn lookup(&self, base: Resource) -> Option<Iri> {
        self.classes.get(&base).copied()
    }

    /// The base class holding `id`.
    pub fn owner(&self, id: Iri) -> Option<Resource> {
        self.owners.get(&id).copied()
    }

    pub fn contains(&self, base: Resource) -> bool {
        self.classes.contains_key(&base)
    }

    /// Every cataloged base class, in registration order.
    pub fn bases(&self) -> impl Iterator<Item = Resource> + '_ {
        self.classes.keys().copied()
    }

    /// Every canonical identifier, in registration order of their bases.
    pub fn identifiers(&self) -> impl Iterator<Item = Iri> + '_ {
        self.classes.values().copied()
    }

    /// `(base, identifier)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (Resource, Iri)> + '_ {
        self.classes.iter().map(|(&base, &id)| (base, id))
    }

    /// Every profile registered against `base`, in registration order.
    pub fn find_profiles(&self, base: Resource) -> &[Resource] {
        self.profiles.get(&base).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn interner(&self) -> &'i IriInterner {
        self.interner
    }

    /// Check that the two maps are mutual inverses.
    ///
    /// Returns the first inconsistency found, rendered for humans.
    pub fn check(&self) -> Result<(), String> {
        if self.classes.len() != self.owners.len() {
            return Err(format!(
                "{} bases but {} identifiers",
                self.classes.len(),
                self.owners.len()
            ));
        }
        for (&base, &id) in &self.classes {
            if self.owners.get(&id) != Some(&base) {
                return Err(format!(
                    "`{}` maps to `{}`, which is not owned by it",
                    base.render(self.interner),
                    self.interner.lookup(id)
                ));
            }
        }
        Ok(())
    }

    /// Debug-mode validation of the bijection.
    pub fn validate(&self) {
        if cfg!(debug_assertions) {
            let result = self.check();
            debug_assert!(result.is_ok(), "catalog bijection broken: {result:?}");
        }
    }
}

impl std::fmt::Debug for Catalog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.classes
                    .iter()
                    .map(|(base, &id)| (base.render(self.interner), self.interner.lookup(id))),
            )
            .finish()
    }
}
