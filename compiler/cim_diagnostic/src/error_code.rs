//! Diagnostic codes.

use std::fmt;

use crate::Severity;

/// Codes for every diagnostic the flattening engine reports.
///
/// Format: W#### for problems the engine works around, N#### for notes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Profile class has no resolvable base class
    W0001,
    /// Property declared by a profile whose base class cannot be resolved
    W0002,
    /// Object property has no resolvable range class
    W0003,
    /// Inverse of a profiled property is not itself profiled
    N0001,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
            ErrorCode::W0003 => "W0003",
            ErrorCode::N0001 => "N0001",
        }
    }

    /// One-line explanation for `--explain`-style lookups.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::W0001 => "profile class has no base class and is left out of the schema",
            ErrorCode::W0002 => {
                "property is declared by a profile without a base class and is left out"
            }
            ErrorCode::W0003 => "object property has no range class and is left out",
            ErrorCode::N0001 => "inverse property is not part of the profile; no inverse link",
        }
    }

    pub fn default_severity(self) -> Severity {
        match self {
            ErrorCode::W0001 | ErrorCode::W0002 | ErrorCode::W0003 => Severity::Warning,
            ErrorCode::N0001 => Severity::Note,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
