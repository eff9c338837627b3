use crate::error::Error;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::Element;

/// ## Creation
impl Tree {
    /// Create a new, unattached element.
    ///
    /// Attach it to a parent with [`Tree::append`].
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let doc = tree.new_element("doc");
    /// assert_eq!(tree.name(doc), "doc");
    /// assert_eq!(tree.parent(doc), None);
    /// ```
    pub fn new_element<S: Into<String>>(&mut self, name: S) -> Node {
        Node::new(self.arena.new_node(Element::new(name.into())))
    }

    /// Create a new element and append it to `parent`.
    pub fn append_element<S: Into<String>>(
        &mut self,
        parent: Node,
        name: S,
    ) -> Result<Node, Error> {
        let child = self.new_element(name);
        if let Err(err) = self.append(parent, child) {
            self.remove(child);
            return Err(err);
        }
        Ok(child)
    }
}
