use tracing::debug;

use crate::treedata::{Node, Tree};

/// ## Path queries
impl Tree {
    /// Select elements with a slash-delimited path of element names.
    ///
    /// Empty segments are ignored, so a leading `/` makes no difference. An
    /// expression without segments selects `root` itself. The
    /// first segment must match the name of `root` itself; every following
    /// segment selects the direct children, with that name, of the elements
    /// selected so far. Deeper descendants are never searched.
    ///
    /// The result is in document order. If no element matches, it is empty.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let root = tree.new_element("root");
    /// let child1 = tree.append_element(root, "child1")?;
    /// let child2 = tree.append_element(root, "child2")?;
    /// let subchild2 = tree.append_element(child2, "subchild2")?;
    ///
    /// assert_eq!(tree.query(root, "/root/child1"), vec![child1]);
    /// assert_eq!(tree.query(root, "/root/child2/subchild2"), vec![subchild2]);
    /// assert_eq!(tree.query(root, "/root/subchild2"), vec![]);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn query(&self, root: Node, expression: &str) -> Vec<Node> {
        let mut segments = expression.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return vec![root];
        };
        let mut candidates = if self.name(root) == first {
            vec![root]
        } else {
            Vec::new()
        };
        for segment in segments {
            candidates = candidates
                .iter()
                .flat_map(|candidate| self.children(*candidate))
                .filter(|child| self.name(*child) == segment)
                .collect();
            debug!(segment, matched = candidates.len(), "query segment");
            if candidates.is_empty() {
                break;
            }
        }
        candidates
    }
}
