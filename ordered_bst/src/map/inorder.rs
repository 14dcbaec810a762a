use std::iter::FusedIterator;

use super::Node;

/// An iterator over the entries of a `BSTMap`, in ascending key order
///
/// Created by [`BSTMap::iter_inorder`](super::BSTMap::iter_inorder).
#[derive(Debug)]
pub struct IterInorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Clone for IterInorder<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K, V> IterInorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {stack: Vec::new(), remaining: len};
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant along its leftmost path
    fn push_left_spine(&mut self, node: Option<&'a Node<K, V>>) {
        let mut current = node;
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K, V> Iterator for IterInorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterInorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterInorder<'a, K, V> {}
