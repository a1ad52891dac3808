//! Element tree and tree queries

use schemagen_diagnostics::Span;

/// A node in the element tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A child element
    Element(Element),
    /// Character data (text, resolved references and CDATA, merged)
    Text(String),
}

/// An element with its attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    span: Span,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: Span::default(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append character data
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append text, merging with a directly preceding text node
    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    /// Drop whitespace-only text nodes once the element is complete
    pub(crate) fn finish(&mut self) {
        self.children
            .retain(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));
    }

    /// Local name of the element (namespace prefix removed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte span of the start tag in the source document
    pub fn span(&self) -> Span {
        self.span
    }

    /// Look up an attribute value by its (qualified) key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value, or the empty string when absent
    pub fn attribute_or_empty(&self, key: &str) -> &str {
        self.attribute(key).unwrap_or("")
    }

    /// All child nodes in document order
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element, whatever its name
    pub fn first_child_element(&self) -> Option<&Element> {
        self.children().next()
    }

    /// First child element with the given name
    pub fn first_child_named(&self, name: &str) -> Option<&Element> {
        self.children().find(|e| e.name == name)
    }

    /// Run of same-named child elements, starting at the first match
    pub fn same_tag_run<'a>(&'a self, name: &'a str) -> SameTagRun<'a> {
        SameTagRun::new(&self.children, name)
    }

    /// Pre-order traversal of this element and all its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![Visit {
                element: self,
                parent: None,
            }],
        }
    }

    /// Concatenated character data of this element and its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Ordered, finite iterator over same-named sibling elements
///
/// Cloning the iterator (or calling [`SameTagRun::restart`]) yields the same
/// sequence again; the tree is never mutated.
#[derive(Debug, Clone)]
pub struct SameTagRun<'a> {
    siblings: &'a [Node],
    name: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> SameTagRun<'a> {
    fn new(siblings: &'a [Node], name: &'a str) -> Self {
        let start = siblings
            .iter()
            .position(|node| matches!(node, Node::Element(e) if e.name == name))
            .unwrap_or(siblings.len());
        Self {
            siblings,
            name,
            start,
            pos: start,
        }
    }

    /// Rewind to the first match
    pub fn restart(&mut self) {
        self.pos = self.start;
    }
}

impl<'a> Iterator for SameTagRun<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.siblings.len() {
            let node = &self.siblings[self.pos];
            self.pos += 1;
            if let Node::Element(e) = node {
                if e.name == self.name {
                    return Some(e);
                }
            }
        }
        None
    }
}

/// An element reached by [`Element::descendants`], with its parent
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub element: &'a Element,
    pub parent: Option<&'a Element>,
}

/// Pre-order traversal iterator
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        let element = visit.element;
        let children: Vec<&'a Element> = element.children().collect();
        for child in children.into_iter().rev() {
            self.stack.push(Visit {
                element: child,
                parent: Some(element),
            });
        }
        Some(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Element {
        Element::new("Scenario")
            .with_child(Element::new("Name").with_text("first"))
            .with_child(Element::new("Epoch").with_text("2020-01-01T00:00:00"))
            .with_child(Element::new("Name").with_text("second"))
            .with_child(Element::new("Name").with_text("third"))
    }

    #[test]
    fn test_same_tag_run_collects_every_sibling_in_order() {
        let root = scenario();
        let names: Vec<String> = root.same_tag_run("Name").map(|e| e.text()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_same_tag_run_is_restartable() {
        let root = scenario();
        let mut run = root.same_tag_run("Name");
        assert_eq!(run.clone().count(), 3);
        assert!(run.next().is_some());
        run.restart();
        assert_eq!(run.count(), 3);
    }

    #[test]
    fn test_same_tag_run_without_match_is_empty() {
        let root = scenario();
        assert_eq!(root.same_tag_run("Missing").count(), 0);
    }

    #[test]
    fn test_descendants_preorder_with_parents() {
        let root = Element::new("schema")
            .with_child(Element::new("element").with_child(Element::new("complexType")))
            .with_child(Element::new("complexType"));

        let visits: Vec<(String, Option<String>)> = root
            .descendants()
            .map(|v| (v.element.name().to_string(), v.parent.map(|p| p.name().to_string())))
            .collect();

        assert_eq!(
            visits,
            vec![
                ("schema".to_string(), None),
                ("element".to_string(), Some("schema".to_string())),
                ("complexType".to_string(), Some("element".to_string())),
                ("complexType".to_string(), Some("schema".to_string())),
            ]
        );
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let e = Element::new("a")
            .with_text("x")
            .with_child(Element::new("b").with_text("y"))
            .with_text("z");
        assert_eq!(e.text(), "xyz");
    }
}
