//! Well-known namespaces and terms.

/// XML Schema datatypes. Ranges in this namespace are primitive types.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// UML extension vocabulary carried by CIM ontologies.
pub const UML: &str = "http://langdale.com.au/2005/UML#";

/// Stereotype marking a property whose value is passed by reference.
pub const UML_BYREFERENCE: &str = "http://langdale.com.au/2005/UML#byreference";

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Whether an IRI lives in the primitive-type namespace.
pub fn is_primitive(iri: &str) -> bool {
    crate::namespace_of(iri) == XSD
}
