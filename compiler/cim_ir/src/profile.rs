//! Profile-level property records.

use crate::Resource;

/// One property as declared by one profile class.
///
/// Produced by [`ProfileAccessor::property_info`](crate::ProfileAccessor::property_info).
/// The same underlying `property` may be declared by several profiles; the
/// flattening engine merges those declarations into a single spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    /// The underlying base-ontology property.
    pub property: Resource,
    /// The profile class declaring the property.
    pub domain: Resource,
    /// The profile class restricting the property's values, if any.
    pub range: Option<Resource>,
    /// Minimum cardinality is at least one.
    pub required: bool,
    /// Maximum cardinality is at most one.
    pub functional: bool,
    /// Values are passed by reference rather than nested.
    pub reference: bool,
    /// Profile-specific label.
    pub label: Option<String>,
    /// Profile-specific documentation.
    pub comment: Option<String>,
}

impl PropertyInfo {
    /// A declaration with no cardinality constraints or annotations.
    pub fn new(property: Resource, domain: Resource) -> Self {
        PropertyInfo {
            property,
            domain,
            range: None,
            required: false,
            functional: false,
            reference: false,
            label: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: Resource) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn functional(mut self) -> Self {
        self.functional = true;
        self
    }

    #[must_use]
    pub fn by_reference(mut self) -> Self {
        self.reference = true;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
