//! Profile flattening engine for the CIM profile schema compiler.
//!
//! Given a profile ontology that specializes a larger base ontology, this
//! crate works out exactly which classes, properties, enumerations and
//! superclass edges the profile uses, gives each class one canonical
//! identifier, and reports the result as a stream of facts to a
//! [`SchemaSink`].
//!
//! # Pipeline
//!
//! ```text
//! OntologyStore + ProfileAccessor
//!         │
//!         ▼
//!   scan (worklist) ──► Catalog, PropertyAccumulator, EnumAccumulator
//!         │
//!         ▼
//!   emit classes → datatypes → properties → hierarchy (Lattice)
//!         │
//!         ▼
//!     SchemaSink
//! ```
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=cim_flatten=debug`: phase summaries.
//! - `RUST_LOG=cim_flatten::catalog=trace`: every binding and rename.
//!
//! Call [`init_tracing`] once to install the subscriber.

mod accumulate;
mod catalog;
mod error;
mod generator;
mod lattice;
mod naming;
mod options;
mod sink;
mod type_info;

use std::sync::Once;

pub use accumulate::{Added, EnumAccumulator, PropertyAccumulator, PropertySpec};
pub use catalog::Catalog;
pub use error::GenerateError;
pub use generator::{GenerateReport, GenerateStats, Phase, SchemaGenerator};
pub use lattice::Lattice;
pub use naming::Naming;
pub use options::{GeneratorOptions, MergePolicy};
pub use sink::{RecordingSink, SchemaEvent, SchemaSink};
pub use type_info::TypeInfo;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber honoring `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing on later calls.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
