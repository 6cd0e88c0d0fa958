//! Declarative schema metadata attached to every binding type.
//!
//! The tables here mirror the XSD facets (presence, length, digits) so an
//! XML runtime or validator can consult them. Nothing in this crate enforces
//! them.

/// Workday web-services namespace.
pub const WD_NAMESPACE: &str = "urn:com.workday/bsvc";

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Whether a field maps to a child element or an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlKind {
    Element,
    Attribute,
    /// Character content of a simple-content element.
    Text,
}

/// XSD facets for one field of a binding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// XML local name.
    pub name: &'static str,
    pub kind: XmlKind,
    /// `minOccurs="1"` (elements) or `use="required"` (attributes).
    pub required: bool,
    /// `maxOccurs="unbounded"`.
    pub repeated: bool,
    pub max_length: Option<u32>,
    pub total_digits: Option<u8>,
    pub fraction_digits: Option<u8>,
}

impl FieldSpec {
    /// An optional, single-valued child element.
    pub const fn element(name: &'static str) -> Self {
        Self {
            name,
            kind: XmlKind::Element,
            required: false,
            repeated: false,
            max_length: None,
            total_digits: None,
            fraction_digits: None,
        }
    }

    /// An optional attribute.
    pub const fn attribute(name: &'static str) -> Self {
        Self {
            kind: XmlKind::Attribute,
            ..Self::element(name)
        }
    }

    /// The element's text content.
    pub const fn text() -> Self {
        Self {
            kind: XmlKind::Text,
            ..Self::element("$text")
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub const fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub const fn digits(mut self, total: u8, fraction: u8) -> Self {
        self.total_digits = Some(total);
        self.fraction_digits = Some(fraction);
        self
    }
}

/// A record generated from the Integrations schema.
pub trait SchemaType {
    /// XSD type or element name.
    const ELEMENT: &'static str;

    /// Target namespace.
    const NAMESPACE: &'static str = WD_NAMESPACE;

    /// Field facets in schema order.
    const FIELDS: &'static [FieldSpec];

    /// Look up a field's facets by XML name.
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    /// Names of fields the schema marks as required.
    fn required_fields() -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl SchemaType for Sample {
        const ELEMENT: &'static str = "Sample_Data";
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::element("Name").required().max_length(80),
            FieldSpec::element("Amount").digits(18, 3),
            FieldSpec::attribute("Descriptor"),
            FieldSpec::element("Tag").repeated(),
        ];
    }

    #[test]
    fn test_field_lookup() {
        let name = Sample::field("Name").unwrap();
        assert!(name.required);
        assert_eq!(name.max_length, Some(80));
        assert_eq!(name.kind, XmlKind::Element);

        let amount = Sample::field("Amount").unwrap();
        assert_eq!((amount.total_digits, amount.fraction_digits), (Some(18), Some(3)));

        assert_eq!(Sample::field("Descriptor").unwrap().kind, XmlKind::Attribute);
        assert!(Sample::field("Tag").unwrap().repeated);
        assert!(Sample::field("Missing").is_none());
    }

    #[test]
    fn test_required_fields_and_namespace() {
        assert_eq!(Sample::required_fields(), vec!["Name"]);
        assert_eq!(Sample::NAMESPACE, "urn:com.workday/bsvc");
    }
}
