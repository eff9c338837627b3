use indextree::{Arena, NodeId};

use crate::xmlvalue::Element;

pub(crate) type XmlArena = Arena<Element>;

/// An element in the XML tree.
/// This is a lightweight value and can be copied.
///
/// Two handles are equal when they refer to the same element, so node
/// identity is handle equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Tree` struct owns all XML elements in your program. It lets you
/// create, map, edit, query and render one or more XML trees.
///
/// Elements are stored in an arena and addressed by [`Node`] handles; a
/// parent link is a lookup, not ownership.
///
/// `Tree` is implemented in several sections focusing on different aspects
/// of building and editing XML data.
pub struct Tree {
    pub(crate) arena: XmlArena,
}

impl Tree {
    /// Create a new, empty `Tree`.
    pub fn new() -> Self {
        Tree {
            arena: XmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
