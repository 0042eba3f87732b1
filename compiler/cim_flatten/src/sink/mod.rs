//! Outbound emission contract.
//!
//! The generator reports each fact of the output schema through one
//! [`SchemaSink`] call. Serializers implement the trait; the generator never
//! sees an output format.

use std::fmt;

/// Receiver of schema facts, one method per fact kind.
///
/// Identifiers are canonical output identifiers unless named `original`,
/// which is the base ontology IRI the fact was derived from.
pub trait SchemaSink {
    fn emit_class(&mut self, id: &str, original: &str);

    fn emit_label(&mut self, id: &str, text: &str);

    /// Documentation for `id`: the base resource's own comment, and the
    /// comments of the profiles that specialize it.
    fn emit_comment(&mut self, id: &str, base_comment: Option<&str>, profile_comment: Option<&str>);

    fn emit_instance(&mut self, id: &str, original: &str, type_id: &str);

    /// A profiled class standing in for a primitive type.
    fn emit_datatype(&mut self, id: &str, primitive_id: &str);

    fn emit_object_property(
        &mut self,
        id: &str,
        original: &str,
        domain_id: &str,
        range_id: &str,
        required: bool,
        functional: bool,
    );

    fn emit_datatype_property(
        &mut self,
        id: &str,
        original: &str,
        domain_id: &str,
        type_id: Option<&str>,
        primitive_id: Option<&str>,
        required: bool,
    );

    fn emit_inverse(&mut self, id: &str, inverse_id: &str);

    fn emit_stereotype(&mut self, id: &str, stereotype_id: &str);

    fn emit_super_class(&mut self, sub_id: &str, super_id: &str);

    fn emit_package(&mut self, id: &str);

    fn emit_defined_by(&mut self, member_id: &str, container_id: &str);
}

/// One recorded [`SchemaSink`] call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemaEvent {
    Class {
        id: String,
        original: String,
    },
    Label {
        id: String,
        text: String,
    },
    Comment {
        id: String,
        base: Option<String>,
        profile: Option<String>,
    },
    Instance {
        id: String,
        original: String,
        type_id: String,
    },
    Datatype {
        id: String,
        primitive: String,
    },
    ObjectProperty {
        id: String,
        original: String,
        domain: String,
        range: String,
        required: bool,
        functional: bool,
    },
    DatatypeProperty {
        id: String,
        original: String,
        domain: String,
        type_id: Option<String>,
        primitive: Option<String>,
        required: bool,
    },
    Inverse {
        id: String,
        inverse: String,
    },
    Stereotype {
        id: String,
        stereotype: String,
    },
    SuperClass {
        sub: String,
        sup: String,
    },
    Package {
        id: String,
    },
    DefinedBy {
        member: String,
        container: String,
    },
}

impl SchemaEvent {
    /// The identifier this event is about.
    pub fn subject(&self) -> &str {
        match self {
            SchemaEvent::Class { id, .. }
            | SchemaEvent::Label { id, .. }
            | SchemaEvent::Comment { id, .. }
            | SchemaEvent::Instance { id, .. }
            | SchemaEvent::Datatype { id, .. }
            | SchemaEvent::ObjectProperty { id, .. }
            | SchemaEvent::DatatypeProperty { id, .. }
            | SchemaEvent::Inverse { id, .. }
            | SchemaEvent::Stereotype { id, .. }
            | SchemaEvent::Package { id } => id,
            SchemaEvent::SuperClass { sub, .. } => sub,
            SchemaEvent::DefinedBy { member, .. } => member,
        }
    }
}

fn opt(value: Option<&String>) -> &str {
    value.map_or("-", String::as_str)
}

impl fmt::Display for SchemaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaEvent::Class { id, original } => write!(f, "class {id} <- {original}"),
            SchemaEvent::Label { id, text } => write!(f, "label {id} {text:?}"),
            SchemaEvent::Comment { id, base, profile } => {
                write!(
                    f,
                    "comment {id} base={:?} profile={:?}",
                    opt(base.as_ref()),
                    opt(profile.as_ref())
                )
            }
            SchemaEvent::Instance {
                id,
                original,
                type_id,
            } => write!(f, "instance {id}: {type_id} <- {original}"),
            SchemaEvent::Datatype { id, primitive } => write!(f, "datatype {id} = {primitive}"),
            SchemaEvent::ObjectProperty {
                id,
                original,
                domain,
                range,
                required,
                functional,
            } => write!(
                f,
                "object-property {id} <- {original} ({domain} -> {range}) required={required} functional={functional}"
            ),
            SchemaEvent::DatatypeProperty {
                id,
                original,
                domain,
                type_id,
                primitive,
                required,
            } => write!(
                f,
                "datatype-property {id} <- {original} ({domain} -> {} / {}) required={required}",
                opt(type_id.as_ref()),
                opt(primitive.as_ref())
            ),
            SchemaEvent::Inverse { id, inverse } => write!(f, "inverse {id} <-> {inverse}"),
            SchemaEvent::Stereotype { id, stereotype } => write!(f, "stereotype {id} {stereotype}"),
            SchemaEvent::SuperClass { sub, sup } => write!(f, "super-class {sub} < {sup}"),
            SchemaEvent::Package { id } => write!(f, "package {id}"),
            SchemaEvent::DefinedBy { member, container } => {
                write!(f, "defined-by {member} in {container}")
            }
        }
    }
}

/// A sink that keeps every event in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SchemaEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events about `id`, in call order.
    pub fn about<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SchemaEvent> + 'a {
        self.events.iter().filter(move |event| event.subject() == id)
    }

    /// One line per event.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}

impl SchemaSink for RecordingSink {
    fn emit_class(&mut self, id: &str, original: &str) {
        self.events.push(SchemaEvent::Class {
            id: id.to_owned(),
            original: original.to_owned(),
        });
    }

    fn emit_label(&mut self, id: &str, text: &str) {
        self.events.push(SchemaEvent::Label {
            id: id.to_owned(),
            text: text.to_owned(),
        });
    }

    fn emit_comment(&mut self, id: &str, base_comment: Option<&str>, profile_comment: Option<&str>) {
        self.events.push(SchemaEvent::Comment {
            id: id.to_owned(),
            base: base_comment.map(str::to_owned),
            profile: profile_comment.map(str::to_owned),
        });
    }

    fn emit_instance(&mut self, id: &str, original: &str, type_id: &str) {
        self.events.push(SchemaEvent::Instance {
            id: id.to_owned(),
            original: original.to_owned(),
            type_id: type_id.to_owned(),
        });
    }

    fn emit_datatype(&mut self, id: &str, primitive_id: &str) {
        self.events.push(SchemaEvent::Datatype {
            id: id.to_owned(),
            primitive: primitive_id.to_owned(),
        });
    }

    fn emit_object_property(
        &mut self,
        id: &str,
        original: &str,
        domain_id: &str,
        range_id: &str,
        required: bool,
        functional: bool,
    ) {
        self.events.push(SchemaEvent::ObjectProperty {
            id: id.to_owned(),
            original: original.to_owned(),
            domain: domain_id.to_owned(),
            range: range_id.to_owned(),
            required,
            functional,
        });
    }

    fn emit_datatype_property(
        &mut self,
        id: &str,
        original: &str,
        domain_id: &str,
        type_id: Option<&str>,
        primitive_id: Option<&str>,
        required: bool,
    ) {
        self.events.push(SchemaEvent::DatatypeProperty {
            id: id.to_owned(),
            original: original.to_owned(),
            domain: domain_id.to_owned(),
            type_id: type_id.map(str::to_owned),
            primitive: primitive_id.map(str::to_owned),
            required,
        });
    }

    fn emit_inverse(&mut self, id: &str, inverse_id: &str) {
        self.events.push(SchemaEvent::Inverse {
            id: id.to_owned(),
            inverse: inverse_id.to_owned(),
        });
    }

    fn emit_stereotype(&mut self, id: &str, stereotype_id: &str) {
        self.events.push(SchemaEvent::Stereotype {
            id: id.to_owned(),
            stereotype: stereotype_id.to_owned(),
        });
    }

    fn emit_super_class(&mut self, sub_id: &str, super_id: &str) {
        self.events.push(SchemaEvent::SuperClass {
            sub: sub_id.to_owned(),
            sup: super_id.to_owned(),
        });
    }

    fn emit_package(&mut self, id: &str) {
        self.events.push(SchemaEvent::Package { id: id.to_owned() });
    }

    fn emit_defined_by(&mut self, member_id: &str, container_id: &str) {
        self.events.push(SchemaEvent::DefinedBy {
            member: member_id.to_owned(),
            container: container_id.to_owned(),
        });
    }
}
