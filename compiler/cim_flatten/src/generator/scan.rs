use std::collections::VecDeque;

use cim_diagnostic::{Diagnostic, ErrorCode};
use cim_ir::{OntologyStore, ProfileAccessor, Resource};

use super::SchemaGenerator;
use crate::error::GenerateError;

impl<M> SchemaGenerator<'_, M>
where
    M: OntologyStore + ProfileAccessor + ?Sized,
{
    /// Breadth-first walk over every profile reachable from the roots.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn scan_profiles(&mut self) -> Result<(), GenerateError> {
        let mut work = VecDeque::new();
        for root in self.model.profile_classes()? {
            if self.props.mark_visited(root) {
                work.push_back(root);
            }
        }

        while let Some(profile) = work.pop_front() {
            self.stats.profiles_scanned += 1;
            self.scan_properties(profile, &mut work)?;

            let Some(base) = self.model.base_class(profile)? else {
                let diag = Diagnostic::new(ErrorCode::W0001).with_context(self.render(profile));
                self.report(diag);
                continue;
            };
            self.catalog.register(base, profile);

            if self.model.is_enumerated(profile)? || self.model.is_restricted_enum(profile)? {
                let individuals = self.model.individuals(profile)?;
                self.enums.add(base, individuals);
            }
        }

        tracing::debug!(
            profiles = self.stats.profiles_scanned,
            classes = self.catalog.len(),
            properties = self.props.len(),
            individuals = self.enums.len(),
            "profile scan complete"
        );
        Ok(())
    }

    fn scan_properties(
        &mut self,
        profile: Resource,
        work: &mut VecDeque<Resource>,
    ) -> Result<(), GenerateError> {
        for property in self.model.properties(profile)? {
            let info = self.model.property_info(profile, property)?;
            let added = self.props.add(info, self.model)?;
            if let Some(range) = added.discovered {
                tracing::trace!(range = %self.render(range), "discovered range profile");
                work.push_back(range);
            }
            if !added.anchored {
                let context = format!("{} in {}", self.render(property), self.render(profile));
                self.report(Diagnostic::new(ErrorCode::W0002).with_context(context));
            }
        }
        Ok(())
    }

    /// Catalog every class used only as a property endpoint, and collect
    /// the raw ranges of datatype properties.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn scan_domains_and_ranges(&mut self) -> Result<(), GenerateError> {
        let mut added = 0usize;
        let mut unranged = Vec::new();

        for spec in self.props.iter() {
            added += usize::from(self.catalog.register_if_absent(spec.base_domain));
            if let Some(range) = spec.base_range {
                added += usize::from(self.catalog.register_if_absent(range));
            } else if spec.datatype {
                if let Some(range) = self.model.range(spec.property)? {
                    self.datatypes.insert(range);
                }
            } else {
                unranged.push(spec.property);
            }
        }

        for property in unranged {
            let diag = Diagnostic::new(ErrorCode::W0003).with_context(self.render(property));
            self.report(diag);
        }

        tracing::debug!(
            added,
            classes = self.catalog.len(),
            datatypes = self.datatypes.len(),
            "property endpoints cataloged"
        );
        Ok(())
    }
}
