//! A fixed representation of a tree of elements.
//!
//! [`Tree`] elements are mutable and live in an arena, but it is useful to
//! have a fixed representation of an element that you can create, store and
//! compare separately. You turn it into a node with [`Element::build`], and
//! take a snapshot of a node with [`Tree::to_fixed`].
//!
//! Example:
//!
//! ```rust
//! use xmlmap::fixed;
//!
//! let fixed_element = fixed::Element {
//!     name: "foo".to_string(),
//!     attributes: vec![("a".to_string(), "A".to_string())],
//!     content: fixed::Content::Text("Example".to_string()),
//! };
//!
//! let mut tree = xmlmap::Tree::new();
//! let node = fixed_element.build(&mut tree)?;
//! assert_eq!(tree.render(node), "<foo a=\"A\">\n  Example\n</foo>\n");
//! assert_eq!(tree.to_fixed(node), fixed_element);
//! # Ok::<(), xmlmap::Error>(())
//! ```

use crate::error::Error;
use crate::treedata::{Node, Tree};

/// A fixed representation of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Name of element
    pub name: String,
    /// Attributes, in order
    pub attributes: Vec<(String, String)>,
    /// Text or children
    pub content: Content,
}

/// A fixed representation of element content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// Child elements; possibly none.
    Children(Vec<Element>),
    /// Text.
    Text(String),
}

impl Element {
    /// An element without attributes or content.
    pub fn empty(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Turn a fixed element into a new, unattached node.
    ///
    /// Attributes are added strictly, so duplicate or empty names fail.
    pub fn build(&self, tree: &mut Tree) -> Result<Node, Error> {
        let node = tree.new_element(self.name.as_str());
        for (name, value) in &self.attributes {
            tree.element_mut(node).add_attribute(name, value)?;
        }
        match &self.content {
            Content::Text(text) => tree.set_text(node, text.as_str())?,
            Content::Children(children) => {
                for child in children {
                    let child = child.build(tree)?;
                    tree.append(node, child)?;
                }
            }
        }
        Ok(node)
    }
}

impl Tree {
    /// Take a fixed snapshot of an element and its descendants.
    ///
    /// Text node attributes are not part of the snapshot.
    pub fn to_fixed(&self, node: Node) -> Element {
        let element = self.element(node);
        let content = match element.text() {
            Some(text) => Content::Text(text.get().to_string()),
            None => Content::Children(
                self.children(node)
                    .map(|child| self.to_fixed(child))
                    .collect(),
            ),
        };
        Element {
            name: element.name().to_string(),
            attributes: element
                .attributes()
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_nested() {
        let mut tree = Tree::new();
        let fixed = Element {
            name: "root".to_string(),
            attributes: vec![],
            content: Content::Children(vec![Element::empty("a"), Element::empty("b")]),
        };
        let node = fixed.build(&mut tree).unwrap();
        assert_eq!(tree.render(node), "<root>\n  <a/>\n  <b/>\n</root>\n");
    }

    #[test]
    fn test_build_duplicate_attribute() {
        let mut tree = Tree::new();
        let fixed = Element {
            name: "root".to_string(),
            attributes: vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
            ],
            content: Content::Children(vec![]),
        };
        assert!(matches!(
            fixed.build(&mut tree),
            Err(Error::DuplicateAttribute(_))
        ));
    }
}
