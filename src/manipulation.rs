use crate::error::Error;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::TextNode;

/// Manipulation of the tree structure.
///
/// This maintains the invariant that an element holds either text or child
/// elements, never both:
/// - You cannot append a child to an element that holds text.
/// - You cannot set text on an element that has children.
///
/// A child can only occur once among the children of a parent, and an
/// element can never become its own descendant.
impl Tree {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent. If the child was attached
    /// to another parent it is moved.
    ///
    /// ```rust
    /// use xmlmap::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let parent = tree.new_element("parent");
    /// let child = tree.new_element("child");
    ///
    /// tree.append(parent, child)?;
    /// assert!(matches!(tree.append(parent, child), Err(Error::DuplicateChild(_))));
    /// assert_eq!(tree.children(parent).count(), 1);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent
            .get()
            .checked_append(child.get(), self.arena_mut())
            .map_err(|_| Error::CyclicChild(self.name(child).to_string()))?;
        Ok(())
    }

    /// Detach a child from a parent.
    ///
    /// The child becomes the top of its own tree and can be attached
    /// elsewhere. This is a no-op if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: Node, child: Node) {
        if self.parent(child) == Some(parent) {
            child.get().detach(self.arena_mut());
        }
    }

    /// Remove a node (and its descendants) from the tree.
    ///
    /// The removed nodes are gone from the `Tree`; their handles should not
    /// be used anymore.
    pub fn remove(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    /// Set the text of an element, replacing any existing text.
    ///
    /// Existing text attributes are dropped along with the old text.
    ///
    /// ```rust
    /// use xmlmap::{ErrorKind, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let element = tree.new_element("element");
    /// tree.append_element(element, "child")?;
    ///
    /// let err = tree.set_text(element, "Some text").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Structural);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn set_text<S: Into<String>>(&mut self, node: Node, content: S) -> Result<(), Error> {
        if self.has_children(node) {
            return Err(Error::ChildrenPresent(self.name(node).to_string()));
        }
        self.element_mut(node).text = Some(TextNode::new(content.into()));
        Ok(())
    }

    /// Remove the text of an element, returning it.
    pub fn clear_text(&mut self, node: Node) -> Option<TextNode> {
        self.element_mut(node).text.take()
    }

    /// Add an attribute to the text node of an element.
    ///
    /// Fails with [`Error::MissingText`] if the element holds no text.
    pub fn add_text_attribute(&mut self, node: Node, name: &str, value: &str) -> Result<(), Error> {
        let element = self.element_mut(node);
        match element.text.as_mut() {
            Some(text) => text.add_attribute(name, value),
            None => Err(Error::MissingText(element.name.clone())),
        }
    }

    /// Remove an attribute from the text node of an element.
    ///
    /// Does nothing if there is no text or no such attribute.
    pub fn remove_text_attribute(&mut self, node: Node, name: &str) {
        if let Some(text) = self.element_mut(node).text.as_mut() {
            text.remove_attribute(name);
        }
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if self.text(parent).is_some() {
            return Err(Error::TextPresent(self.name(parent).to_string()));
        }
        if self.parent(child) == Some(parent) {
            return Err(Error::DuplicateChild(self.name(parent).to_string()));
        }
        Ok(())
    }
}
