//! The orchestration driver.
//!
//! A run is a fixed sequence of phases, each entered exactly once:
//!
//! ```text
//! Scan -> EmitClasses -> EmitDatatypes -> EmitProperties -> EmitHierarchy -> Done
//! ```
//!
//! Scan walks the profile graph breadth-first from the store's roots,
//! filling the catalog and the property and enumeration accumulators. The
//! catalog is frozen once scan ends; every emission phase only reads it.
//!
//! [`SchemaGenerator::run`] takes the generator by value, so a finished or
//! failed run cannot be resumed.

mod annotate;
mod emit;
mod scan;

use cim_diagnostic::{Diagnostic, DiagnosticQueue};
use cim_ir::{FxIndexSet, Iri, OntologyStore, ProfileAccessor, Resource};
use rustc_hash::FxHashSet;

use crate::accumulate::{EnumAccumulator, PropertyAccumulator};
use crate::catalog::Catalog;
use crate::error::GenerateError;
use crate::naming::Naming;
use crate::options::GeneratorOptions;
use crate::sink::SchemaSink;

/// Phases of a run, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Scan,
    EmitClasses,
    EmitDatatypes,
    EmitProperties,
    EmitHierarchy,
    Done,
}

impl Phase {
    /// The phase that follows this one.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Scan => Some(Phase::EmitClasses),
            Phase::EmitClasses => Some(Phase::EmitDatatypes),
            Phase::EmitDatatypes => Some(Phase::EmitProperties),
            Phase::EmitProperties => Some(Phase::EmitHierarchy),
            Phase::EmitHierarchy => Some(Phase::Done),
            Phase::Done => None,
        }
    }
}

/// Counts of what a run produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub profiles_scanned: usize,
    pub classes: usize,
    pub individuals: usize,
    pub datatypes: usize,
    pub properties: usize,
    pub packages: usize,
    pub super_class_edges: usize,
}

/// Outcome of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Non-fatal problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics discarded by the queue's limit or de-duplication.
    pub dropped_diagnostics: usize,
    pub stats: GenerateStats,
}

impl GenerateReport {
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }
}

/// Flattens a profile over its base ontology into a stream of schema facts.
pub struct SchemaGenerator<'m, M: ?Sized> {
    model: &'m M,
    naming: Naming,
    catalog: Catalog<'m>,
    props: PropertyAccumulator,
    enums: EnumAccumulator,
    /// Raw ranges of datatype properties, in discovery order.
    datatypes: FxIndexSet<Resource>,
    /// Packages already emitted.
    packages: FxHashSet<Resource>,
    diagnostics: DiagnosticQueue,
    stats: GenerateStats,
    phase: Phase,
}

impl<'m, M> SchemaGenerator<'m, M>
where
    M: OntologyStore + ProfileAccessor + ?Sized,
{
    pub fn new(model: &'m M, options: GeneratorOptions) -> Self {
        let naming = Naming::new(options.namespace);
        SchemaGenerator {
            model,
            catalog: Catalog::new(model.interner(), naming.clone()),
            naming,
            props: PropertyAccumulator::new(options.merge_policy),
            enums: EnumAccumulator::new(),
            datatypes: FxIndexSet::default(),
            packages: FxHashSet::default(),
            diagnostics: DiagnosticQueue::with_config(options.diagnostics),
            stats: GenerateStats::default(),
            phase: Phase::Scan,
        }
    }

    /// Run every phase, reporting schema facts to `sink`.
    ///
    /// A store failure aborts the run; facts already handed to `sink` are
    /// not retracted.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(namespace = self.naming.namespace().unwrap_or("-"))
    )]
    pub fn run<S: SchemaSink + ?Sized>(
        mut self,
        sink: &mut S,
    ) -> Result<GenerateReport, GenerateError> {
        self.scan_profiles()?;
        self.scan_domains_and_ranges()?;
        self.catalog.validate();

        self.advance(Phase::EmitClasses);
        self.emit_classes(sink)?;

        self.advance(Phase::EmitDatatypes);
        self.emit_datatypes(sink)?;

        self.advance(Phase::EmitProperties);
        self.emit_properties(sink)?;

        self.advance(Phase::EmitHierarchy);
        self.emit_hierarchy(sink)?;

        self.advance(Phase::Done);
        tracing::debug!(
            classes = self.stats.classes,
            properties = self.stats.properties,
            edges = self.stats.super_class_edges,
            diagnostics = self.diagnostics.len(),
            "schema generation complete"
        );

        Ok(GenerateReport {
            dropped_diagnostics: self.diagnostics.dropped(),
            diagnostics: self.diagnostics.flush(),
            stats: self.stats,
        })
    }

    fn advance(&mut self, to: Phase) {
        debug_assert_eq!(self.phase.next(), Some(to), "phases run in order");
        tracing::trace!(phase = ?to, "entering phase");
        self.phase = to;
    }

    /// Queue a non-fatal problem and mirror it to the log.
    fn report(&mut self, diag: Diagnostic) {
        tracing::warn!(
            code = diag.code.as_str(),
            context = diag.context.as_deref().unwrap_or(""),
            "{}",
            diag.message
        );
        self.diagnostics.push(diag);
    }

    fn text(&self, id: Iri) -> &'static str {
        self.model.interner().lookup(id)
    }

    /// Derived identifier of a property, individual, package or datatype.
    fn derived(&self, resource: Resource) -> &'static str {
        self.text(self.naming.derive(self.model.interner(), resource))
    }

    fn render(&self, resource: Resource) -> String {
        resource.render(self.model.interner()).into_owned()
    }

    /// Canonical identifier of a cataloged base class.
    fn class_id(&self, base: Resource) -> Result<&'static str, GenerateError> {
        self.catalog
            .lookup(base)
            .map(|id| self.text(id))
            .ok_or_else(|| GenerateError::Uncataloged {
                resource: self.render(base),
            })
    }
}

#[cfg(test)]
mod tests;
