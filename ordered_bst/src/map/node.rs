use std::fmt;

/// A single node of the binary search tree
///
/// Each node exclusively owns its left and right subtrees.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> fmt::Debug for Node<K, V>
    where K: fmt::Debug,
          V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printing the subtrees would recurse through the whole tree
        f.debug_struct("Node")
            .field("key", self.key())
            .field("value", self.value())
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    pub(crate) fn take_left(&mut self) -> Option<Self> {
        self.left.take().map(|node| *node)
    }

    pub(crate) fn take_right(&mut self) -> Option<Self> {
        self.right.take().map(|node| *node)
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }
}
