//! Scan-phase accumulators.
//!
//! - [`PropertyAccumulator`] merges every profile's declaration of a property
//!   into one [`PropertySpec`] and discovers range profiles exactly once.
//! - [`EnumAccumulator`] collects the individuals of enumerated profiles per
//!   base class.

mod enums;
mod properties;

pub use enums::EnumAccumulator;
pub use properties::{Added, PropertyAccumulator, PropertySpec};

/// Join two optional documentation strings with a blank line.
pub(crate) fn append_comment(existing: Option<String>, next: Option<&str>) -> Option<String> {
    match (existing, next) {
        (existing, None) => existing,
        (None, Some(next)) => Some(next.to_owned()),
        (Some(existing), Some(next)) => Some(format!("{existing}\n\n{next}")),
    }
}
