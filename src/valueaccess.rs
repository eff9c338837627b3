use crate::treedata::{Node, Tree};
use crate::xmlvalue::{Element, TextNode};

/// ## Value access
///
/// Every node in a [`Tree`] is an element, so these accessors never fail.
impl Tree {
    /// Access to the element for this node.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        self.arena[node.get()].get()
    }

    /// Mutable access to the element for this node.
    #[inline]
    pub fn element_mut(&mut self, node: Node) -> &mut Element {
        self.arena[node.get()].get_mut()
    }

    /// The name of the element.
    pub fn name(&self, node: Node) -> &str {
        self.element(node).name()
    }

    /// The text node of this element, if any.
    pub fn text(&self, node: Node) -> Option<&TextNode> {
        self.element(node).text()
    }

    /// The text content of this element, if any.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let p = tree.new_element("p");
    /// assert_eq!(tree.text_str(p), None);
    /// tree.set_text(p, "Example")?;
    /// assert_eq!(tree.text_str(p), Some("Example"));
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|t| t.get())
    }

    /// Get an attribute of this element.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.element(node).get_attribute(name)
    }
}
