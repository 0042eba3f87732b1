//! Shared vocabulary for the CIM profile schema compiler.
//!
//! This crate holds everything the flattening engine and its collaborators
//! agree on:
//!
//! - **IRIs** ([`Iri`], [`IriInterner`]) — 32-bit interned handles for every
//!   ontology identifier and every canonical output identifier.
//! - **Resources** ([`Resource`]) — a named IRI or an anonymous (blank) node.
//! - **Collaborator traits** ([`OntologyStore`], [`ProfileAccessor`]) — the
//!   inbound queries the engine makes against the merged profile and base
//!   ontologies. Storage formats and reasoning live behind these traits.
//! - **Reference store** ([`MemoryOntology`]) — an in-memory implementation
//!   assembled through [`MemoryOntologyBuilder`].
//!
//! # Pipeline Position
//!
//! ```text
//! Load (external) → OntologyStore / ProfileAccessor → **cim_flatten** → SchemaSink
//! ```

mod iri;
mod interner;
pub mod memory;
mod profile;
mod resource;
mod store;
pub mod vocab;

pub use interner::{InternError, IriInterner};
pub use iri::{local_name, namespace_of, Iri};
pub use memory::{MemoryOntology, MemoryOntologyBuilder};
pub use profile::PropertyInfo;
pub use resource::Resource;
pub use store::{OntologyStore, ProfileAccessor, StoreError, StoreResult};

/// Insertion-ordered map with the Fx hasher.
///
/// Used wherever iteration order becomes emission order.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set with the Fx hasher.
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
