//! Diagnostics for the CIM profile schema compiler.
//!
//! The flattening engine tolerates some broken input (a profile without a
//! base class, a property whose range cannot be resolved). Those problems
//! are not errors in the `Result` sense: the run continues and each one is
//! recorded as a [`Diagnostic`] in a [`DiagnosticQueue`], which the caller
//! receives alongside the run result.
//!
//! - Error codes for searchability
//! - One message per problem
//! - Optional context naming the offending resource

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
