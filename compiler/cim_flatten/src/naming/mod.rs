//! Canonical identifier derivation.
//!
//! Every output identifier is a pure function of the resource it names plus
//! the configured output namespace:
//!
//! | Derivation            | Namespace set                 | No namespace      |
//! |-----------------------|-------------------------------|-------------------|
//! | `derive(r)`           | namespace + local name of `r` | IRI of `r`        |
//! | `derive_for_profile`  | IRI of the profile            | IRI of the base   |
//! | `qualified(r, n)`     | `derive(r)` + `_` + hash [+ `_n`] | same          |
//!
//! `qualified` only comes into play when two distinct bases share a local
//! name under the output namespace.

use std::hash::{Hash, Hasher};

use cim_ir::{Iri, IriInterner, Resource};
use rustc_hash::FxHasher;

/// Identifier derivation scheme for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Naming {
    namespace: Option<String>,
}

impl Naming {
    pub fn new(namespace: Option<String>) -> Self {
        Naming { namespace }
    }

    /// Whether identifiers are rewritten into an output namespace.
    pub fn rewrites(&self) -> bool {
        self.namespace.is_some()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Identifier for a base class, datatype, property, individual or package.
    pub fn derive(&self, interner: &IriInterner, resource: Resource) -> Iri {
        match &self.namespace {
            Some(ns) => {
                let local = resource.local_name(interner);
                interner.intern(&format!("{ns}{local}"))
            }
            None => match resource {
                Resource::Named(iri) => iri,
                Resource::Blank(_) => interner.intern(&resource.render(interner)),
            },
        }
    }

    /// Candidate identifier for a base class claimed by a named profile.
    ///
    /// With rewriting enabled the profile's own IRI is used as-is (usually,
    /// but not necessarily, inside the output namespace).
    pub fn derive_for_profile(
        &self,
        interner: &IriInterner,
        base: Resource,
        profile: Resource,
    ) -> Iri {
        if self.rewrites() {
            match profile {
                Resource::Named(iri) => iri,
                Resource::Blank(_) => interner.intern(&profile.render(interner)),
            }
        } else {
            self.derive(interner, base)
        }
    }

    /// Disambiguated identifier for `resource`. `attempt` starts at 1.
    pub fn qualified(&self, interner: &IriInterner, resource: Resource, attempt: u32) -> Iri {
        let plain = interner.lookup(self.derive(interner, resource));
        let mut hasher = FxHasher::default();
        resource.render(interner).hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "eight hex digits are enough to separate a handful of clashing bases"
        )]
        let tag = hasher.finish() as u32;
        if attempt <= 1 {
            interner.intern(&format!("{plain}_{tag:08x}"))
        } else {
            interner.intern(&format!("{plain}_{tag:08x}_{attempt}"))
        }
    }
}

#[cfg(test)]
mod tests;
