//! Diagnostic queue for collecting and deduplicating diagnostics.
//!
//! Features:
//! - Limit on retained diagnostics to keep reports readable
//! - Deduplication of identical diagnostics
//! - Count of everything dropped, so nothing disappears silently

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::Diagnostic;

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics retained (0 = unlimited).
    pub limit: usize,
    /// Drop diagnostics identical to one already retained.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            limit: 0,
            deduplicate: false,
        }
    }
}

fn fingerprint(diag: &Diagnostic) -> u64 {
    let mut hasher = FxHasher::default();
    diag.hash(&mut hasher);
    hasher.finish()
}

/// Ordered collection of the diagnostics reported during one run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<u64>,
    /// Diagnostics dropped by the limit or by deduplication.
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            dropped: 0,
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if it was filtered.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert(fingerprint(&diag)) {
            self.dropped += 1;
            return false;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Check if the retention limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.limit > 0 && self.diagnostics.len() >= self.config.limit
    }

    /// Number of diagnostics filtered out so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of retained warnings (notes excluded).
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take all retained diagnostics in report order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests;
