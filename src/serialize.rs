use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::entity::serialize_predefined_entities;
use crate::error::Error;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::{Attributes, TextNode};

/// The declaration line that starts every rendered document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const INDENTATION: &str = "  ";

fn push_attributes(out: &mut String, attributes: &Attributes) {
    for (name, value) in attributes {
        // attribute names and values are sanitized on the way in
        let _ = write!(out, " {}=\"{}\"", name, value);
    }
}

fn push_text(out: &mut String, text: &TextNode, indentation: &str) {
    let content = serialize_predefined_entities(text.get());
    if text.attributes().is_empty() {
        let _ = writeln!(out, "{}{}", indentation, content);
    } else {
        out.push_str(indentation);
        out.push_str("<text");
        push_attributes(out, text.attributes());
        let _ = writeln!(out, ">{}</text>", content);
    }
}

/// ## Rendering
///
/// Elements are rendered one tag per line, indented by two spaces per level
/// of depth. Elements without text and children are self-closing.
impl Tree {
    /// Render an element and its descendants as pretty-printed XML.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let element = tree.new_element("element");
    /// tree.element_mut(element).add_attribute("attr1", "value1")?;
    /// tree.append_element(element, "child1")?;
    /// let child2 = tree.append_element(element, "child2")?;
    /// tree.set_text(child2, "text")?;
    ///
    /// assert_eq!(
    ///     tree.render(element),
    ///     "<element attr1=\"value1\">\n  <child1/>\n  <child2>\n    text\n  </child2>\n</element>\n"
    /// );
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn render(&self, node: Node) -> String {
        self.render_indented(node, 0)
    }

    /// Render an element as if it were nested `depth` levels deep.
    pub fn render_indented(&self, node: Node, depth: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, node, depth);
        out
    }

    fn render_into(&self, out: &mut String, node: Node, depth: usize) {
        let element = self.element(node);
        let indentation = INDENTATION.repeat(depth);
        out.push_str(&indentation);
        out.push('<');
        out.push_str(element.name());
        push_attributes(out, element.attributes());
        if element.text().is_none() && !self.has_children(node) {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        if let Some(text) = element.text() {
            push_text(out, text, &INDENTATION.repeat(depth + 1));
        }
        for child in self.children(node) {
            self.render_into(out, child, depth + 1);
        }
        let _ = writeln!(out, "{}</{}>", indentation, element.name());
    }

    /// Render a complete document: the XML declaration followed by the
    /// rendered element.
    pub fn to_document_string(&self, node: Node) -> String {
        let mut out = String::from(XML_DECLARATION);
        out.push('\n');
        self.render_into(&mut out, node, 0);
        out
    }

    /// Write a complete document to a writer.
    pub fn serialize(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        w.write_all(self.to_document_string(node).as_bytes())?;
        Ok(())
    }

    /// Write a complete document to a file, replacing its contents.
    pub fn write_to_file(&self, node: Node, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "writing document");
        std::fs::write(path, self.to_document_string(node))?;
        Ok(())
    }
}
