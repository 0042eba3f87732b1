use cim_diagnostic::{Diagnostic, ErrorCode};
use cim_ir::{local_name, vocab, Iri, OntologyStore, ProfileAccessor, Resource};

use super::SchemaGenerator;
use crate::accumulate::PropertySpec;
use crate::error::GenerateError;
use crate::lattice::Lattice;
use crate::sink::SchemaSink;
use crate::type_info::TypeInfo;

impl<M> SchemaGenerator<'_, M>
where
    M: OntologyStore + ProfileAccessor + ?Sized,
{
    #[tracing::instrument(level = "debug", skip_all, fields(classes = self.catalog.len()))]
    pub(super) fn emit_classes<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GenerateError> {
        let entries: Vec<(Resource, Iri)> = self.catalog.entries().collect();
        for (base, id) in entries {
            let id = self.text(id);
            self.generate_class(sink, base, id)?;
        }
        Ok(())
    }

    fn generate_class<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
        base: Resource,
        id: &str,
    ) -> Result<(), GenerateError> {
        sink.emit_class(id, &self.render(base));
        sink.emit_label(id, local_name(id));
        let base_comment = self.model.comment(base)?;
        let profile_comment = self.profile_comment(base)?;
        sink.emit_comment(id, base_comment.as_deref(), profile_comment.as_deref());

        let individuals: Vec<Resource> = self.enums.get(base).collect();
        for individual in individuals {
            let individual_id = self.derived(individual);
            sink.emit_instance(individual_id, &self.render(individual), id);
            self.annotate(sink, individual_id, individual)?;
            self.stats.individuals += 1;
        }

        self.generate_stereotypes(sink, id, base)?;
        self.generate_package(sink, id, base)?;
        self.stats.classes += 1;
        Ok(())
    }

    /// Declare every profiled class that stands in for a primitive type.
    #[tracing::instrument(level = "debug", skip_all, fields(candidates = self.datatypes.len()))]
    pub(super) fn emit_datatypes<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GenerateError> {
        let candidates: Vec<Resource> = self.datatypes.iter().copied().collect();
        for datatype in candidates {
            let info = TypeInfo::resolve(Some(datatype), &self.naming, self.model)?;
            let Some((class, primitive)) = info.alias() else {
                continue;
            };
            let id = self.text(class);
            sink.emit_datatype(id, self.text(primitive));
            self.annotate(sink, id, datatype)?;
            self.stats.datatypes += 1;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(properties = self.props.len()))]
    pub(super) fn emit_properties<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GenerateError> {
        let specs: Vec<PropertySpec> = self.props.iter().cloned().collect();
        for spec in &specs {
            self.generate_property(sink, spec)?;
        }
        Ok(())
    }

    fn generate_property<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
        spec: &PropertySpec,
    ) -> Result<(), GenerateError> {
        let property = spec.property;
        let id = self.derived(property);
        let original = self.render(property);
        let domain = self.class_id(spec.base_domain)?;

        if spec.datatype {
            let range = TypeInfo::resolve(self.model.range(property)?, &self.naming, self.model)?;
            sink.emit_datatype_property(
                id,
                &original,
                domain,
                range.class.map(|class| self.text(class)),
                range.primitive.map(|primitive| self.text(primitive)),
                spec.required,
            );
        } else {
            // Reported as W0003 during scan.
            let Some(range_base) = spec.base_range else {
                return Ok(());
            };
            let range = self.class_id(range_base)?;
            sink.emit_object_property(id, &original, domain, range, spec.required, spec.functional);

            if let Some(inverse) = self.model.inverse_of(property)? {
                if self.props.contains_key(inverse) {
                    sink.emit_inverse(id, self.derived(inverse));
                } else {
                    let context = format!("{} of {original}", self.render(inverse));
                    self.report(Diagnostic::new(ErrorCode::N0001).with_context(context));
                }
            }
        }

        if let Some(label) = &spec.label {
            sink.emit_label(id, label);
        }
        let base_comment = self.model.comment(property)?;
        sink.emit_comment(id, base_comment.as_deref(), spec.comment.as_deref());
        self.generate_stereotypes(sink, id, property)?;
        if spec.reference {
            sink.emit_stereotype(id, vocab::UML_BYREFERENCE);
        }
        self.generate_package(sink, id, property)?;
        self.stats.properties += 1;
        Ok(())
    }

    /// One superclass edge per pair of the reduced hierarchy.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn emit_hierarchy<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GenerateError> {
        let lattice = Lattice::build(&self.catalog, self.model)?;
        for (sub, sup) in lattice.reduced_edges() {
            sink.emit_super_class(self.text(sub), self.text(sup));
            self.stats.super_class_edges += 1;
        }
        tracing::debug!(edges = self.stats.super_class_edges, "hierarchy emitted");
        Ok(())
    }
}
