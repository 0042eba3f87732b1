//! Ontology resources: named IRIs and anonymous nodes.

use std::borrow::Cow;

use crate::{local_name, Iri, IriInterner};

/// A class, property, individual or package in the merged ontology.
///
/// Anonymous profile classes (inline restrictions) are `Blank`; everything
/// that can be named in the output is `Named`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Resource {
    Named(Iri),
    Blank(u32),
}

impl Resource {
    /// Whether this resource is anonymous.
    #[inline]
    pub fn is_anon(self) -> bool {
        matches!(self, Resource::Blank(_))
    }

    /// The IRI of a named resource.
    #[inline]
    pub fn iri(self) -> Option<Iri> {
        match self {
            Resource::Named(iri) => Some(iri),
            Resource::Blank(_) => None,
        }
    }

    /// Full textual identity: the IRI, or `_:bN` for a blank node.
    pub fn render(self, interner: &IriInterner) -> Cow<'static, str> {
        match self {
            Resource::Named(iri) => Cow::Borrowed(interner.lookup(iri)),
            Resource::Blank(id) => Cow::Owned(format!("_:b{id}")),
        }
    }

    /// Local part of the identity. Blank nodes use their whole label.
    pub fn local_name(self, interner: &IriInterner) -> Cow<'static, str> {
        match self {
            Resource::Named(iri) => Cow::Borrowed(local_name(interner.lookup(iri))),
            Resource::Blank(id) => Cow::Owned(format!("b{id}")),
        }
    }
}

impl From<Iri> for Resource {
    fn from(iri: Iri) -> Self {
        Resource::Named(iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_resource_renders_its_iri() {
        let interner = IriInterner::new();
        let res = Resource::Named(interner.intern("http://iec.ch/TC57/CIM#Breaker"));
        assert!(!res.is_anon());
        assert_eq!(res.render(&interner), "http://iec.ch/TC57/CIM#Breaker");
        assert_eq!(res.local_name(&interner), "Breaker");
    }

    #[test]
    fn blank_resource_is_anonymous() {
        let interner = IriInterner::new();
        let res = Resource::Blank(4);
        assert!(res.is_anon());
        assert_eq!(res.iri(), None);
        assert_eq!(res.render(&interner), "_:b4");
        assert_eq!(res.local_name(&interner), "b4");
    }
}
