use crate::treedata::{Node, Tree};

/// ## Read-only access
impl Tree {
    /// Get parent node.
    ///
    /// Returns [`None`] if the element is the top of its tree.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let p = tree.new_element("p");
    /// let em = tree.append_element(p, "em")?;
    /// assert_eq!(tree.parent(em), Some(p));
    /// assert_eq!(tree.parent(p), None);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Check whether a node has been removed with [`Tree::remove`] or by a
    /// global edit.
    pub fn is_removed(&self, node: Node) -> bool {
        self.arena()[node.get()].is_removed()
    }

    /// Iterator over the child elements of this node, in document order.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let p = tree.new_element("p");
    /// let a = tree.append_element(p, "a")?;
    /// let b = tree.append_element(p, "b")?;
    /// assert_eq!(tree.children(p).collect::<Vec<_>>(), vec![a, b]);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Get first child.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Returns true if the element has at least one child.
    pub fn has_children(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    pub fn child_index(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.children(parent).position(|n| n == child)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over of the descendants of this node,
    /// including this one. In document order (pre-order depth-first).
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let a = tree.new_element("a");
    /// let b = tree.append_element(a, "b")?;
    /// let c = tree.append_element(b, "c")?;
    /// let d = tree.append_element(a, "d")?;
    ///
    /// let descendants = tree.descendants(a).collect::<Vec<_>>();
    /// assert_eq!(descendants, vec![a, b, c, d]);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Visit `node` and all its descendants in pre-order, depth-first.
    ///
    /// The visitor gets mutable access to the tree. A node's children are
    /// looked up only after the node itself has been visited, so the visitor
    /// may rename, annotate or remove the children of the node it is given;
    /// removed children are not visited. Every node is visited exactly once.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let a = tree.new_element("a");
    /// let b = tree.append_element(a, "b")?;
    /// tree.append_element(b, "c")?;
    ///
    /// let mut names = Vec::new();
    /// tree.traverse(a, |tree, node| names.push(tree.name(node).to_string()));
    /// assert_eq!(names, vec!["a", "b", "c"]);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn traverse<F>(&mut self, node: Node, mut visitor: F)
    where
        F: FnMut(&mut Tree, Node),
    {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if self.is_removed(current) {
                continue;
            }
            visitor(self, current);
            if self.is_removed(current) {
                continue;
            }
            let children = self.children(current).collect::<Vec<_>>();
            stack.extend(children.into_iter().rev());
        }
    }
}
