//! Property range resolution.

use cim_ir::{vocab, Iri, OntologyStore, Resource, StoreResult};

use crate::naming::Naming;

/// A property range split into its class and primitive parts.
///
/// | Range                                 | `class` | `primitive` |
/// |---------------------------------------|---------|-------------|
/// | absent                                | none    | none        |
/// | primitive type (XSD)                  | none    | the range   |
/// | class declared equivalent to an XSD type | class id | the XSD type |
/// | any other class                       | class id | none       |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    /// Canonical identifier of the range class.
    pub class: Option<Iri>,
    /// Primitive type identifier.
    pub primitive: Option<Iri>,
}

impl TypeInfo {
    pub fn resolve<S: OntologyStore + ?Sized>(
        range: Option<Resource>,
        naming: &Naming,
        store: &S,
    ) -> StoreResult<Self> {
        let Some(range) = range else {
            return Ok(TypeInfo::default());
        };
        let interner = store.interner();

        if let Some(iri) = primitive_iri(range, store) {
            return Ok(TypeInfo {
                class: None,
                primitive: Some(iri),
            });
        }

        let primitive = store
            .same_as(range)?
            .and_then(|alias| primitive_iri(alias, store));
        Ok(TypeInfo {
            class: Some(naming.derive(interner, range)),
            primitive,
        })
    }

    /// The class and primitive parts, when the range is a profiled class
    /// standing in for a primitive type.
    pub fn alias(&self) -> Option<(Iri, Iri)> {
        self.class.zip(self.primitive)
    }
}

fn primitive_iri<S: OntologyStore + ?Sized>(resource: Resource, store: &S) -> Option<Iri> {
    resource
        .iri()
        .filter(|&iri| vocab::is_primitive(store.interner().lookup(iri)))
}
