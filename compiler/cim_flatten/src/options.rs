//! Run configuration.

use cim_diagnostic::DiagnosticConfig;

/// How repeated declarations of one property are combined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// A flag set by any declaring profile is set on the merged property.
    #[default]
    MostRestrictive,
    /// The first declaration's flags stand.
    FirstWins,
}

/// Configuration for one [`SchemaGenerator`](crate::SchemaGenerator) run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Output namespace. When set, identifiers are rewritten into it;
    /// when absent, base ontology IRIs are used as-is.
    pub namespace: Option<String>,
    pub merge_policy: MergePolicy,
    pub diagnostics: DiagnosticConfig,
}

impl GeneratorOptions {
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, config: DiagnosticConfig) -> Self {
        self.diagnostics = config;
        self
    }
}
