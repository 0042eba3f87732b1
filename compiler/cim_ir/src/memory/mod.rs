//! In-memory ontology store.
//!
//! [`MemoryOntology`] implements both collaborator traits over plain maps.
//! It is assembled through [`MemoryOntologyBuilder`], which interns IRIs as
//! it goes and hands back [`Resource`]s for further wiring:
//!
//! ```text
//! let mut b = MemoryOntology::builder();
//! let breaker = b.class("http://iec.ch/TC57/CIM#Breaker");
//! let profile = b.profile("http://example.com/profile#Breaker", Some(breaker));
//! let model = b.build();
//! ```
//!
//! Named profiles are the roots returned by `profile_classes`; anonymous
//! profiles are only reachable through property ranges.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    FxIndexMap, IriInterner, OntologyStore, ProfileAccessor, PropertyInfo, Resource, StoreError,
    StoreResult,
};

#[derive(Default, Debug)]
struct PropertyRecord {
    datatype: bool,
    range: Option<Resource>,
    inverse: Option<Resource>,
}

#[derive(Default, Debug)]
struct ProfileRecord {
    base: Option<Resource>,
    properties: FxIndexMap<Resource, PropertyInfo>,
    enumerated: bool,
    restricted_enum: bool,
    individuals: Vec<Resource>,
}

#[derive(Default, Debug)]
struct Annotations {
    label: Option<String>,
    comment: Option<String>,
    stereotypes: Vec<Resource>,
    defined_by: Option<Resource>,
    same_as: Option<Resource>,
}

/// An ontology held entirely in memory.
#[derive(Debug)]
pub struct MemoryOntology {
    interner: IriInterner,
    roots: Vec<Resource>,
    /// Direct superclasses per class.
    supers: FxHashMap<Resource, Vec<Resource>>,
    properties: FxHashMap<Resource, PropertyRecord>,
    profiles: FxIndexMap<Resource, ProfileRecord>,
    annotations: FxHashMap<Resource, Annotations>,
    /// Resources whose queries fail with a backend error.
    poisoned: FxHashSet<Resource>,
}

impl MemoryOntology {
    pub fn builder() -> MemoryOntologyBuilder {
        MemoryOntologyBuilder::default()
    }

    fn check(&self, resource: Resource) -> StoreResult<()> {
        if self.poisoned.contains(&resource) {
            return Err(StoreError::Backend(format!(
                "query failed for `{}`",
                resource.render(&self.interner)
            )));
        }
        Ok(())
    }

    fn annotations(&self, resource: Resource) -> StoreResult<Option<&Annotations>> {
        self.check(resource)?;
        Ok(self.annotations.get(&resource))
    }

    fn profile(&self, profile: Resource) -> StoreResult<&ProfileRecord> {
        self.check(profile)?;
        self.profiles
            .get(&profile)
            .ok_or_else(|| StoreError::UnknownResource {
                resource: profile.render(&self.interner).into_owned(),
            })
    }

    fn property(&self, property: Resource) -> StoreResult<Option<&PropertyRecord>> {
        self.check(property)?;
        Ok(self.properties.get(&property))
    }
}

impl OntologyStore for MemoryOntology {
    fn interner(&self) -> &IriInterner {
        &self.interner
    }

    fn profile_classes(&self) -> StoreResult<Vec<Resource>> {
        Ok(self.roots.clone())
    }

    fn super_classes(&self, class: Resource) -> StoreResult<Vec<Resource>> {
        self.check(class)?;
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        let mut stack = vec![class];
        while let Some(current) = stack.pop() {
            for &sup in self.supers.get(&current).into_iter().flatten() {
                if sup != class && seen.insert(sup) {
                    out.push(sup);
                    stack.push(sup);
                }
            }
        }
        Ok(out)
    }

    fn defined_by(&self, resource: Resource) -> StoreResult<Option<Resource>> {
        Ok(self.annotations(resource)?.and_then(|a| a.defined_by))
    }

    fn label(&self, resource: Resource) -> StoreResult<Option<String>> {
        Ok(self.annotations(resource)?.and_then(|a| a.label.clone()))
    }

    fn comment(&self, resource: Resource) -> StoreResult<Option<String>> {
        Ok(self.annotations(resource)?.and_then(|a| a.comment.clone()))
    }

    fn stereotypes(&self, resource: Resource) -> StoreResult<Vec<Resource>> {
        Ok(self
            .annotations(resource)?
            .map(|a| a.stereotypes.clone())
            .unwrap_or_default())
    }

    fn same_as(&self, resource: Resource) -> StoreResult<Option<Resource>> {
        Ok(self.annotations(resource)?.and_then(|a| a.same_as))
    }

    fn range(&self, property: Resource) -> StoreResult<Option<Resource>> {
        Ok(self.property(property)?.and_then(|p| p.range))
    }

    fn is_datatype_property(&self, property: Resource) -> StoreResult<bool> {
        Ok(self.property(property)?.is_some_and(|p| p.datatype))
    }

    fn inverse_of(&self, property: Resource) -> StoreResult<Option<Resource>> {
        Ok(self.property(property)?.and_then(|p| p.inverse))
    }
}

impl ProfileAccessor for MemoryOntology {
    fn properties(&self, profile: Resource) -> StoreResult<Vec<Resource>> {
        Ok(self.profile(profile)?.properties.keys().copied().collect())
    }

    fn property_info(&self, profile: Resource, property: Resource) -> StoreResult<PropertyInfo> {
        self.profile(profile)?
            .properties
            .get(&property)
            .cloned()
            .ok_or_else(|| StoreError::Malformed {
                resource: profile.render(&self.interner).into_owned(),
                reason: format!(
                    "property `{}` is not declared by this profile",
                    property.render(&self.interner)
                ),
            })
    }

    fn base_class(&self, profile: Resource) -> StoreResult<Option<Resource>> {
        Ok(self.profile(profile)?.base)
    }

    fn is_enumerated(&self, profile: Resource) -> StoreResult<bool> {
        Ok(self.profile(profile)?.enumerated)
    }

    fn is_restricted_enum(&self, profile: Resource) -> StoreResult<bool> {
        Ok(self.profile(profile)?.restricted_enum)
    }

    fn individuals(&self, profile: Resource) -> StoreResult<Vec<Resource>> {
        Ok(self.profile(profile)?.individuals.clone())
    }
}

/// Incremental constructor for [`MemoryOntology`].
#[derive(Default, Debug)]
pub struct MemoryOntologyBuilder {
    interner: IriInterner,
    roots: Vec<Resource>,
    supers: FxHashMap<Resource, Vec<Resource>>,
    properties: FxHashMap<Resource, PropertyRecord>,
    profiles: FxIndexMap<Resource, ProfileRecord>,
    annotations: FxHashMap<Resource, Annotations>,
    poisoned: FxHashSet<Resource>,
    next_blank: u32,
}

impl MemoryOntologyBuilder {
    /// Intern `iri` as a named resource without declaring anything about it.
    pub fn resource(&mut self, iri: &str) -> Resource {
        Resource::Named(self.interner.intern(iri))
    }

    /// Declare a class.
    pub fn class(&mut self, iri: &str) -> Resource {
        let class = self.resource(iri);
        self.supers.entry(class).or_default();
        class
    }

    /// Declare a direct superclass edge.
    pub fn sub_class_of(&mut self, sub: Resource, sup: Resource) -> &mut Self {
        let direct = self.supers.entry(sub).or_default();
        if !direct.contains(&sup) {
            direct.push(sup);
        }
        self
    }

    pub fn datatype_property(&mut self, iri: &str, range: Option<Resource>) -> Resource {
        let property = self.resource(iri);
        let record = self.properties.entry(property).or_default();
        record.datatype = true;
        record.range = range;
        property
    }

    pub fn object_property(&mut self, iri: &str, range: Option<Resource>) -> Resource {
        let property = self.resource(iri);
        let record = self.properties.entry(property).or_default();
        record.datatype = false;
        record.range = range;
        property
    }

    /// Declare two object properties as inverses of each other.
    pub fn inverse(&mut self, a: Resource, b: Resource) -> &mut Self {
        self.properties.entry(a).or_default().inverse = Some(b);
        self.properties.entry(b).or_default().inverse = Some(a);
        self
    }

    pub fn label(&mut self, resource: Resource, text: &str) -> &mut Self {
        self.annotations.entry(resource).or_default().label = Some(text.to_owned());
        self
    }

    pub fn comment(&mut self, resource: Resource, text: &str) -> &mut Self {
        self.annotations.entry(resource).or_default().comment = Some(text.to_owned());
        self
    }

    pub fn stereotype(&mut self, resource: Resource, stereotype: Resource) -> &mut Self {
        self.annotations
            .entry(resource)
            .or_default()
            .stereotypes
            .push(stereotype);
        self
    }

    pub fn defined_by(&mut self, resource: Resource, package: Resource) -> &mut Self {
        self.annotations.entry(resource).or_default().defined_by = Some(package);
        self
    }

    pub fn same_as(&mut self, resource: Resource, other: Resource) -> &mut Self {
        self.annotations.entry(resource).or_default().same_as = Some(other);
        self
    }

    /// Declare a named profile class. Named profiles are scan roots.
    pub fn profile(&mut self, iri: &str, base: Option<Resource>) -> Resource {
        let profile = self.resource(iri);
        if !self.profiles.contains_key(&profile) {
            self.roots.push(profile);
        }
        self.profiles.entry(profile).or_default().base = base;
        profile
    }

    /// Declare an anonymous profile class.
    pub fn anon_profile(&mut self, base: Option<Resource>) -> Resource {
        let profile = Resource::Blank(self.next_blank);
        self.next_blank += 1;
        self.profiles.entry(profile).or_default().base = base;
        profile
    }

    /// Attach a property declaration to the profile named in `info.domain`.
    pub fn declare(&mut self, info: PropertyInfo) -> &mut Self {
        self.profiles
            .entry(info.domain)
            .or_default()
            .properties
            .insert(info.property, info);
        self
    }

    /// Mark `profile` as enumerated with the given individuals.
    pub fn enumerated(&mut self, profile: Resource, individuals: &[Resource]) -> &mut Self {
        let record = self.profiles.entry(profile).or_default();
        record.enumerated = true;
        record.individuals.extend_from_slice(individuals);
        self
    }

    /// Mark `profile` as restricting an enumerated base to `individuals`.
    pub fn restricted_enum(&mut self, profile: Resource, individuals: &[Resource]) -> &mut Self {
        let record = self.profiles.entry(profile).or_default();
        record.restricted_enum = true;
        record.individuals.extend_from_slice(individuals);
        self
    }

    /// Make every query about `resource` fail with a backend error.
    pub fn poison(&mut self, resource: Resource) -> &mut Self {
        self.poisoned.insert(resource);
        self
    }

    pub fn build(self) -> MemoryOntology {
        MemoryOntology {
            interner: self.interner,
            roots: self.roots,
            supers: self.supers,
            properties: self.properties,
            profiles: self.profiles,
            annotations: self.annotations,
            poisoned: self.poisoned,
        }
    }
}

#[cfg(test)]
mod tests;
