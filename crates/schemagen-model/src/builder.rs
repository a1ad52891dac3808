//! Conversion of complexType declarations into record types

use crate::context::Registry;
use crate::loader::SchemaSource;
use crate::types::{MaxOccurs, Property, RecordType, TypeDescriptor, anonymous_type_name, strip_namespace};
use schemagen_diagnostics::{Diagnostic, SG0100, SG0101, SG0102, SG0104, SG0105};
use schemagen_dom::Element;

/// Recognized structure of a complexType body
#[derive(Debug)]
enum Shape<'n> {
    /// No content model at all
    Empty,
    /// `<sequence>` or `<complexContent><sequence>`
    Sequence(&'n Element),
    /// `<complexContent><extension base="X">` with an optional `<sequence>`
    Extension {
        base: String,
        sequence: Option<&'n Element>,
    },
}

/// Builds [`RecordType`]s from complexType nodes against a fixed element registry
#[derive(Debug, Clone, Copy)]
pub struct TypeModelBuilder<'a> {
    registry: &'a Registry,
    source: Option<&'a SchemaSource>,
}

impl<'a> TypeModelBuilder<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry, source: None }
    }

    /// Attach the document the nodes come from, used to locate diagnostics
    pub fn with_source(mut self, source: &'a SchemaSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Build one record type
    ///
    /// `enclosing` is the name of the `<element>` directly containing the
    /// complexType, used when the type itself has no name. Problems that only
    /// drop a single property are pushed to `diagnostics`; a problem that drops
    /// the whole declaration is returned as the error.
    pub fn build(
        &self,
        node: &Element,
        enclosing: Option<&str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<RecordType, Diagnostic> {
        let name = match node.attribute("name").filter(|n| !n.is_empty()).or(enclosing) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(self
                    .diagnostic(Diagnostic::error(SG0100, "Missing name for complexType."), node)
                    .with_help("name the complexType or nest it directly inside a named element"));
            }
        };

        let shape = recognize(node).ok_or_else(|| {
            self.diagnostic(
                Diagnostic::error(SG0101, format!("Unrecognized complexType definition pattern for {name}")),
                node,
            )
        })?;

        let (base, sequence) = match shape {
            Shape::Empty => (None, None),
            Shape::Sequence(seq) => (None, Some(seq)),
            Shape::Extension { base, sequence } => (Some(base), sequence),
        };

        let mut record = RecordType::new(name, base);
        if let Some(sequence) = sequence {
            for child in sequence.children().filter(|c| c.name() == "element") {
                if let Some(property) = self.property(child, &record.name, diagnostics) {
                    record.properties.push(property);
                }
            }
        }
        Ok(record)
    }

    fn property(&self, e: &Element, owner: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<Property> {
        let (min_occurs, max_occurs) = self.occurrences(e, diagnostics);

        let reference = strip_namespace(e.attribute_or_empty("ref"));
        let name = e.attribute_or_empty("name");

        if !reference.is_empty() {
            match self.registry.element(reference) {
                Some(decl) => Some(Property::new(decl.name.clone(), decl.ty.clone()).with_occurs(min_occurs, max_occurs)),
                None => {
                    diagnostics.push(self.diagnostic(
                        Diagnostic::warning(SG0102, format!("Undefined element {reference} in ref.")),
                        e,
                    ));
                    None
                }
            }
        } else if !name.is_empty() {
            let type_name = anonymous_type_name(name, e.attribute_or_empty("type"));
            let ty = TypeDescriptor::from_type_name(type_name);
            Some(Property::new(name, ty).with_occurs(min_occurs, max_occurs))
        } else {
            diagnostics.push(self.diagnostic(
                Diagnostic::warning(SG0105, format!("Element without name or ref in {owner}")),
                e,
            ));
            None
        }
    }

    fn occurrences(&self, e: &Element, diagnostics: &mut Vec<Diagnostic>) -> (u32, MaxOccurs) {
        let min = match e.attribute("minOccurs") {
            None => 1,
            Some(text) => text.trim().parse::<u32>().unwrap_or_else(|_| {
                diagnostics.push(self.invalid_occurs(e, "minOccurs", text));
                1
            }),
        };

        let max = match e.attribute("maxOccurs") {
            None => MaxOccurs::Bounded(1),
            Some(text) if text.trim().eq_ignore_ascii_case("unbounded") => MaxOccurs::Unbounded,
            Some(text) => match text.trim().parse::<u32>() {
                Ok(n) => MaxOccurs::Bounded(n),
                Err(_) => {
                    diagnostics.push(self.invalid_occurs(e, "maxOccurs", text));
                    MaxOccurs::Bounded(1)
                }
            },
        };

        let max = match max {
            MaxOccurs::Bounded(n) if n < min => {
                diagnostics.push(self.diagnostic(
                    Diagnostic::warning(SG0104, format!("maxOccurs {n} is smaller than minOccurs {min}"))
                        .with_help(format!("using maxOccurs=\"{min}\"")),
                    e,
                ));
                MaxOccurs::Bounded(min)
            }
            other => other,
        };

        (min, max)
    }

    fn invalid_occurs(&self, e: &Element, attribute: &str, value: &str) -> Diagnostic {
        self.diagnostic(
            Diagnostic::warning(SG0104, format!("Invalid {attribute} value '{value}'"))
                .with_help(format!("using {attribute}=\"1\"")),
            e,
        )
    }

    fn diagnostic(&self, diag: Diagnostic, node: &Element) -> Diagnostic {
        match self.source {
            Some(source) => diag
                .with_file(source.path.clone())
                .with_location(source.document.location(node.span())),
            None => diag,
        }
    }
}

/// Child elements that carry structure (annotations are documentation only)
fn content(e: &Element) -> impl Iterator<Item = &Element> {
    e.children().filter(|c| c.name() != "annotation")
}

fn recognize(node: &Element) -> Option<Shape<'_>> {
    let Some(first) = content(node).next() else {
        return Some(Shape::Empty);
    };

    match first.name() {
        "sequence" => Some(Shape::Sequence(first)),
        "complexContent" => {
            let inner = content(first).next()?;
            match inner.name() {
                "sequence" => Some(Shape::Sequence(inner)),
                "extension" => {
                    let base = strip_namespace(inner.attribute("base")?);
                    if base.is_empty() {
                        return None;
                    }
                    let sequence = match content(inner).next() {
                        None => None,
                        Some(s) if s.name() == "sequence" => Some(s),
                        Some(_) => return None,
                    };
                    Some(Shape::Extension {
                        base: base.to_string(),
                        sequence,
                    })
                }
                _ => None,
            }
        }
        _ => None,
    }
}
