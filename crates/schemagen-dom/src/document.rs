//! Parsing XML text into an owned element tree

use crate::tree::Element;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use schemagen_diagnostics::{SourceLocation, Span};
use thiserror::Error;

/// Error type for document parsing
#[derive(Debug, Error)]
pub enum DomError {
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Invalid text encoding at byte {position}: {message}")]
    Encoding { position: usize, message: String },

    #[error("Invalid attribute at byte {position}: {message}")]
    Attribute { position: usize, message: String },

    #[error("Unknown entity reference '&{name};' at byte {position}")]
    UnknownEntity { name: String, position: usize },

    #[error("Unexpected closing tag at byte {position}")]
    UnexpectedEnd { position: usize },

    #[error("Element <{name}> is not closed")]
    Unclosed { name: String, position: usize },

    #[error("More than one root element (second root at byte {position})")]
    MultipleRoots { position: usize },

    #[error("Document has no root element")]
    MissingRoot,
}

impl DomError {
    /// Byte offset the error was detected at, if known
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Xml { position, .. }
            | Self::Encoding { position, .. }
            | Self::Attribute { position, .. }
            | Self::UnknownEntity { position, .. }
            | Self::UnexpectedEnd { position }
            | Self::Unclosed { position, .. }
            | Self::MultipleRoots { position } => Some(*position),
            Self::MissingRoot => None,
        }
    }
}

/// A parsed document: the source text and its root element
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

impl Document {
    /// Parse a text buffer into an element tree
    pub fn parse(source: impl Into<String>) -> Result<Self, DomError> {
        let source = source.into();
        let root = build_tree(&source)?;
        Ok(Self { source, root })
    }

    /// The document (root) element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The source text the tree was built from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Line and column of a span inside this document
    pub fn location(&self, span: Span) -> SourceLocation {
        SourceLocation::from_span(span, &self.source)
    }
}

fn build_tree(source: &str) -> Result<Element, DomError> {
    let mut reader = Reader::from_str(source);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|e| DomError::Xml {
            position: reader.error_position() as usize,
            source: e,
        })?;
        let end = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                let element = element_from_tag(&e, Span::new(start, end))?;
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = element_from_tag(&e, Span::new(start, end))?;
                attach(&mut stack, &mut root, element, start)?;
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or(DomError::UnexpectedEnd { position: start })?;
                element.finish();
                attach(&mut stack, &mut root, element, start)?;
            }
            Event::Text(t) => {
                let text = t.decode().map_err(|e| DomError::Encoding {
                    position: start,
                    message: e.to_string(),
                })?;
                push_text(&mut stack, &text);
            }
            Event::CData(c) => {
                let text = String::from_utf8(c.into_inner().into_owned()).map_err(|e| {
                    DomError::Encoding {
                        position: start,
                        message: e.to_string(),
                    }
                })?;
                push_text(&mut stack, &text);
            }
            Event::GeneralRef(r) => {
                let name = r
                    .decode()
                    .map_err(|e| DomError::Encoding {
                        position: start,
                        message: e.to_string(),
                    })?
                    .into_owned();
                let resolved = if r.is_char_ref() {
                    r.resolve_char_ref()
                        .ok()
                        .flatten()
                        .map(String::from)
                } else {
                    quick_xml::escape::resolve_predefined_entity(&name).map(str::to_string)
                };
                match resolved {
                    Some(text) => push_text(&mut stack, &text),
                    None => return Err(DomError::UnknownEntity { name, position: start }),
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no content
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(DomError::Unclosed {
            name: open.name().to_string(),
            position: open.span().start,
        });
    }

    root.ok_or(DomError::MissingRoot)
}

fn element_from_tag(tag: &BytesStart<'_>, span: Span) -> Result<Element, DomError> {
    let name = std::str::from_utf8(tag.local_name().as_ref())
        .map_err(|e| DomError::Encoding {
            position: span.start,
            message: e.to_string(),
        })?
        .to_string();

    let mut element = Element::new(name).with_span(span);
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| DomError::Attribute {
            position: span.start,
            message: e.to_string(),
        })?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| DomError::Attribute {
            position: span.start,
            message: e.to_string(),
        })?;
        let value = attr.unescape_value().map_err(|e| DomError::Attribute {
            position: span.start,
            message: e.to_string(),
        })?;
        element = element.with_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: usize,
) -> Result<(), DomError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(DomError::MultipleRoots { position })
    }
}

fn push_text(stack: &mut [Element], text: &str) {
    // Text outside the root element is prolog/epilog whitespace
    if let Some(parent) = stack.last_mut() {
        parent.push_text(text);
    }
}
