//! Fatal run errors.

use cim_ir::StoreError;

/// A failure that aborts a generator run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A query against the ontology store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Emission referred to a base class the catalog does not hold.
    #[error("base class `{resource}` is not in the catalog")]
    Uncataloged { resource: String },
}
