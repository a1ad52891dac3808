//! Record type model: type descriptors, properties, element declarations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Kind of value a property or element holds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Boolean,
    Double,
    Integer,
    String,
    Timestamp,
    DoubleList,
    IntegerList,
    StringList,
    /// A generated record type, by schema type name
    Custom(String),
}

impl TypeDescriptor {
    /// Resolve a schema type name (namespace prefix already stripped)
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "double" => Self::Double,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "int" => Self::Integer,
            "dateTime" => Self::Timestamp,
            "ListOfDouble" => Self::DoubleList,
            "ListOfString" => Self::StringList,
            "ListOfInt" => Self::IntegerList,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Check if this is a generated record type
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Check if a single value of this type is already a list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::DoubleList | Self::IntegerList | Self::StringList)
    }

    /// Name of the referenced record type, for custom types
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Custom(name) => Some(name),
            _ => None,
        }
    }

    /// Spelling of the type in schema documents
    pub fn schema_name(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Integer => "int",
            Self::String => "string",
            Self::Timestamp => "dateTime",
            Self::DoubleList => "ListOfDouble",
            Self::IntegerList => "ListOfInt",
            Self::StringList => "ListOfString",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

/// Upper occurrence bound of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaxOccurs {
    Bounded(u32),
    Unbounded,
}

impl MaxOccurs {
    /// Check whether more than one occurrence is allowed
    pub fn allows_multiple(&self) -> bool {
        match self {
            Self::Bounded(n) => *n > 1,
            Self::Unbounded => true,
        }
    }
}

impl Default for MaxOccurs {
    fn default() -> Self {
        Self::Bounded(1)
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// One named, ordered member of a record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property (and child element tag) name
    pub name: String,
    /// Value type
    pub ty: TypeDescriptor,
    pub min_occurs: u32,
    pub max_occurs: MaxOccurs,
}

impl Property {
    /// Create a property that occurs exactly once
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            min_occurs: 1,
            max_occurs: MaxOccurs::Bounded(1),
        }
    }

    /// Set the occurrence constraints
    pub fn with_occurs(mut self, min_occurs: u32, max_occurs: MaxOccurs) -> Self {
        self.min_occurs = min_occurs;
        self.max_occurs = max_occurs;
        self
    }

    pub fn multiple_occurrences_allowed(&self) -> bool {
        self.max_occurs.allows_multiple()
    }
}

/// A globally declared schema element, target of `ref` properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDecl {
    pub name: String,
    pub ty: TypeDescriptor,
    /// Schema file the element was declared in
    pub source: Option<PathBuf>,
}

impl ElementDecl {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A generated data-binding type, built from one schema complexType
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    /// Type name
    pub name: String,
    /// Name of the base record type; `None` means the implicit root
    pub base: Option<String>,
    /// Properties in declaration order
    pub properties: Vec<Property>,
}

impl RecordType {
    pub fn new(name: impl Into<String>, base: Option<String>) -> Self {
        Self {
            name: name.into(),
            base,
            properties: Vec::new(),
        }
    }

    /// Append a property, keeping declaration order
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Get property by name
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check if the record declares no properties of its own
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Remove a namespace prefix (`xs:double` becomes `double`)
pub fn strip_namespace(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Type name of an element declaration
///
/// Elements without a `type` attribute use an anonymous type, which is named
/// after the element itself so that it lines up with the record built from
/// the nested complexType.
pub fn anonymous_type_name<'a>(element_name: &'a str, type_attribute: &'a str) -> &'a str {
    let type_name = strip_namespace(type_attribute);
    if type_name.is_empty() {
        element_name
    } else {
        type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("double", TypeDescriptor::Double)]
    #[case("string", TypeDescriptor::String)]
    #[case("boolean", TypeDescriptor::Boolean)]
    #[case("int", TypeDescriptor::Integer)]
    #[case("dateTime", TypeDescriptor::Timestamp)]
    #[case("ListOfDouble", TypeDescriptor::DoubleList)]
    #[case("ListOfString", TypeDescriptor::StringList)]
    #[case("ListOfInt", TypeDescriptor::IntegerList)]
    #[case("Trajectory", TypeDescriptor::Custom("Trajectory".to_string()))]
    #[case("Double", TypeDescriptor::Custom("Double".to_string()))]
    fn test_type_from_name(#[case] name: &str, #[case] expected: TypeDescriptor) {
        assert_eq!(TypeDescriptor::from_type_name(name), expected);
        assert_eq!(expected.schema_name(), name);
    }

    #[test]
    fn test_multiple_occurrences() {
        let p = Property::new("Name", TypeDescriptor::String);
        assert!(!p.multiple_occurrences_allowed());

        assert!(!p.clone().with_occurs(0, MaxOccurs::Bounded(1)).multiple_occurrences_allowed());
        assert!(p.clone().with_occurs(0, MaxOccurs::Bounded(3)).multiple_occurrences_allowed());
        assert!(p.with_occurs(1, MaxOccurs::Unbounded).multiple_occurrences_allowed());
    }

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace("xs:double"), "double");
        assert_eq!(strip_namespace("tns:Spacecraft"), "Spacecraft");
        assert_eq!(strip_namespace("Spacecraft"), "Spacecraft");
        assert_eq!(strip_namespace(""), "");
    }

    #[test]
    fn test_anonymous_type_name_falls_back_to_element_name() {
        assert_eq!(anonymous_type_name("Timeline", ""), "Timeline");
        assert_eq!(anonymous_type_name("StartTime", "xsd:dateTime"), "dateTime");
    }

    #[test]
    fn test_list_kinds() {
        assert!(TypeDescriptor::DoubleList.is_list());
        assert!(!TypeDescriptor::Double.is_list());
        assert!(!TypeDescriptor::Custom("X".into()).is_list());
        assert_eq!(TypeDescriptor::Custom("X".into()).custom_name(), Some("X"));
        assert_eq!(MaxOccurs::Unbounded.to_string(), "unbounded");
    }
}
