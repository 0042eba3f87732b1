use cim_ir::{OntologyStore, ProfileAccessor, Resource};

use super::SchemaGenerator;
use crate::accumulate::append_comment;
use crate::error::GenerateError;
use crate::sink::SchemaSink;

impl<M> SchemaGenerator<'_, M>
where
    M: OntologyStore + ProfileAccessor + ?Sized,
{
    /// Label and comment of `resource`, attached to `id`.
    pub(super) fn annotate<S: SchemaSink + ?Sized>(
        &self,
        sink: &mut S,
        id: &str,
        resource: Resource,
    ) -> Result<(), GenerateError> {
        if let Some(label) = self.model.label(resource)? {
            sink.emit_label(id, &label);
        }
        if let Some(comment) = self.model.comment(resource)? {
            sink.emit_comment(id, Some(&comment), None);
        }
        Ok(())
    }

    pub(super) fn generate_stereotypes<S: SchemaSink + ?Sized>(
        &self,
        sink: &mut S,
        id: &str,
        resource: Resource,
    ) -> Result<(), GenerateError> {
        for stereotype in self.model.stereotypes(resource)? {
            sink.emit_stereotype(id, &self.render(stereotype));
        }
        Ok(())
    }

    /// Containment chain of `member`. Each package is declared the first
    /// time any member reaches it; the walk stops at a package already
    /// declared, whose own chain was emitted then.
    pub(super) fn generate_package<S: SchemaSink + ?Sized>(
        &mut self,
        sink: &mut S,
        id: &str,
        member: Resource,
    ) -> Result<(), GenerateError> {
        let mut member = member;
        let mut member_id = id;

        while let Some(package) = self.model.defined_by(member)? {
            let package_id = self.derived(package);
            let fresh = self.packages.insert(package);
            if fresh {
                sink.emit_package(package_id);
                self.annotate(sink, package_id, package)?;
                self.stats.packages += 1;
            }
            sink.emit_defined_by(member_id, package_id);
            if !fresh {
                break;
            }
            member = package;
            member_id = package_id;
        }
        Ok(())
    }

    /// Comments of every profile collapsed onto `base`, in registration
    /// order.
    pub(super) fn profile_comment(&self, base: Resource) -> Result<Option<String>, GenerateError> {
        let mut comment = None;
        for &profile in self.catalog.find_profiles(base) {
            comment = append_comment(comment, self.model.comment(profile)?.as_deref());
        }
        Ok(comment)
    }
}
