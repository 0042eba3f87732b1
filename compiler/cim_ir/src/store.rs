//! Inbound collaborator traits.
//!
//! The flattening engine never touches a storage format directly. It asks
//! these two traits every question it has about the merged ontology:
//!
//! - [`OntologyStore`] answers questions about any resource (hierarchy,
//!   containment, annotations, property declarations).
//! - [`ProfileAccessor`] answers questions about profile classes.
//!
//! Every query is fallible. A failed query aborts the run.

use crate::{IriInterner, PropertyInfo, Resource};

/// Failure while querying an ontology store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store has no record of a resource the engine asked about.
    #[error("unknown resource `{resource}`")]
    UnknownResource { resource: String },

    /// The store holds the resource but its description is unusable.
    #[error("malformed resource `{resource}`: {reason}")]
    Malformed { resource: String, reason: String },

    /// The underlying backend failed.
    #[error("ontology backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Queries over the merged (profile + base) ontology.
pub trait OntologyStore {
    /// The interner every `Iri` handed out by this store belongs to.
    fn interner(&self) -> &IriInterner;

    /// Top-level profile classes: the roots of the scan.
    fn profile_classes(&self) -> StoreResult<Vec<Resource>>;

    /// Every ancestor of `class`, direct and indirect, in the unrestricted
    /// hierarchy. Never includes `class` itself.
    fn super_classes(&self, class: Resource) -> StoreResult<Vec<Resource>>;

    /// The package containing `resource`, if any.
    fn defined_by(&self, resource: Resource) -> StoreResult<Option<Resource>>;

    fn label(&self, resource: Resource) -> StoreResult<Option<String>>;

    fn comment(&self, resource: Resource) -> StoreResult<Option<String>>;

    /// Stereotypes attached to `resource`, in declaration order.
    fn stereotypes(&self, resource: Resource) -> StoreResult<Vec<Resource>>;

    /// A resource declared equivalent to `resource` (used for datatype
    /// classes aliasing a primitive type).
    fn same_as(&self, resource: Resource) -> StoreResult<Option<Resource>>;

    /// The declared range of a property.
    fn range(&self, property: Resource) -> StoreResult<Option<Resource>>;

    /// Whether `property` is a datatype property (as opposed to an object
    /// property).
    fn is_datatype_property(&self, property: Resource) -> StoreResult<bool>;

    /// The declared inverse of an object property.
    fn inverse_of(&self, property: Resource) -> StoreResult<Option<Resource>>;
}

/// Queries over profile classes.
pub trait ProfileAccessor {
    /// Properties declared by `profile`, in declaration order.
    fn properties(&self, profile: Resource) -> StoreResult<Vec<Resource>>;

    /// The profile's declaration of `property`.
    fn property_info(&self, profile: Resource, property: Resource) -> StoreResult<PropertyInfo>;

    /// The single base class `profile` specializes, if it can be resolved.
    fn base_class(&self, profile: Resource) -> StoreResult<Option<Resource>>;

    /// Whether `profile` is defined by an explicit list of individuals.
    fn is_enumerated(&self, profile: Resource) -> StoreResult<bool>;

    /// Whether `profile` restricts an enumerated base to a subset.
    fn is_restricted_enum(&self, profile: Resource) -> StoreResult<bool>;

    /// The individuals `profile` admits, in declaration order.
    fn individuals(&self, profile: Resource) -> StoreResult<Vec<Resource>>;
}
