use cim_ir::{FxIndexMap, OntologyStore, ProfileAccessor, PropertyInfo, Resource, StoreResult};
use rustc_hash::FxHashSet;

use super::append_comment;
use crate::options::MergePolicy;

/// One property as it will appear in the output schema, merged across every
/// profile that declares it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySpec {
    pub property: Resource,
    /// Base class of the first declaring profile.
    pub base_domain: Resource,
    /// Base class of the range, for object properties.
    pub base_range: Option<Resource>,
    pub datatype: bool,
    pub required: bool,
    pub functional: bool,
    pub reference: bool,
    pub label: Option<String>,
    pub comment: Option<String>,
}

/// Outcome of [`PropertyAccumulator::add`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Added {
    /// A range profile seen for the first time; the caller must scan it.
    pub discovered: Option<Resource>,
    /// Whether the declaration was recorded. A declaration whose domain
    /// profile has no base class cannot be placed in the schema.
    pub anchored: bool,
}

/// Merged property specs, keyed by underlying property.
#[derive(Debug, Default)]
pub struct PropertyAccumulator {
    specs: FxIndexMap<Resource, PropertySpec>,
    /// Profile classes already handed out for scanning.
    visited: FxHashSet<Resource>,
    /// Whole comments already merged into each property's spec.
    comments: FxHashSet<(Resource, String)>,
    policy: MergePolicy,
}

impl PropertyAccumulator {
    pub fn new(policy: MergePolicy) -> Self {
        PropertyAccumulator {
            specs: FxIndexMap::default(),
            visited: FxHashSet::default(),
            comments: FxHashSet::default(),
            policy,
        }
    }

    /// Record `profile` as already scheduled for scanning, so no property
    /// range will surface it again. Returns `true` if it was not yet known.
    pub fn mark_visited(&mut self, profile: Resource) -> bool {
        self.visited.insert(profile)
    }

    /// Merge one declaration.
    ///
    /// Returns the declaration's range profile if no earlier call (and no
    /// [`mark_visited`](Self::mark_visited)) has seen it.
    pub fn add<M>(&mut self, info: PropertyInfo, model: &M) -> StoreResult<Added>
    where
        M: OntologyStore + ProfileAccessor + ?Sized,
    {
        let datatype = model.is_datatype_property(info.property)?;

        let discovered = match info.range {
            Some(range) if !datatype && self.visited.insert(range) => Some(range),
            _ => None,
        };

        let Some(base_domain) = model.base_class(info.domain)? else {
            return Ok(Added {
                discovered,
                anchored: false,
            });
        };

        if let Some(spec) = self.specs.get_mut(&info.property) {
            if self.policy == MergePolicy::MostRestrictive {
                spec.required |= info.required;
                spec.functional |= info.functional;
                spec.reference |= info.reference;
            }
            if spec.label.is_none() {
                spec.label = info.label;
            }
            if let Some(comment) = info.comment {
                if self.comments.insert((info.property, comment.clone())) {
                    spec.comment = append_comment(spec.comment.take(), Some(&comment));
                }
            }
        } else {
            let base_range = if datatype {
                None
            } else {
                resolve_range(&info, model)?
            };
            if let Some(comment) = &info.comment {
                self.comments.insert((info.property, comment.clone()));
            }
            self.specs.insert(
                info.property,
                PropertySpec {
                    property: info.property,
                    base_domain,
                    base_range,
                    datatype,
                    required: info.required,
                    functional: info.functional,
                    reference: info.reference,
                    label: info.label,
                    comment: info.comment,
                },
            );
        }

        Ok(Added {
            discovered,
            anchored: true,
        })
    }

    /// Every distinct spec, in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertySpec> {
        self.specs.values()
    }

    pub fn get(&self, property: Resource) -> Option<&PropertySpec> {
        self.specs.get(&property)
    }

    pub fn contains_key(&self, property: Resource) -> bool {
        self.specs.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Base class of an object property's range: the range profile's base, or
/// the property's declared range when the profile leaves it open.
fn resolve_range<M>(info: &PropertyInfo, model: &M) -> StoreResult<Option<Resource>>
where
    M: OntologyStore + ProfileAccessor + ?Sized,
{
    if let Some(range) = info.range {
        if let Some(base) = model.base_class(range)? {
            return Ok(Some(base));
        }
    }
    model.range(info.property)
}
