use std::fmt;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

mod node;
mod inorder;

pub use node::*;
pub use inorder::*;

/// An unbalanced binary search tree that uses `Box` for its child links
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is strictly less than `k`
/// - The key of each node in the right subtree is strictly greater than `k`
///
/// Keys are unique. Inserting a key that is already present keeps the entry that was inserted
/// first and hands the new value back to the caller.
///
/// No balancing is performed: the shape of the tree depends only on the order of insertion.
/// Inserting keys in sorted order produces a tree where every node only has a right child, and
/// every operation becomes linear in the number of entries. None of the operations recurse, so
/// such a tree is slow but never exhausts the stack.
pub struct BSTMap<K, V> {
    root: Option<Node<K, V>>,
    len: usize,
}

impl<K, V> Default for BSTMap<K, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K, V> Drop for BSTMap<K, V> {
    fn drop(&mut self) {
        // The default drop glue would recurse once per level of the tree
        let mut pending: Vec<Node<K, V>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_left());
            pending.extend(node.take_right());
        }
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for BSTMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_inorder()).finish()
    }
}

impl<K: Ord + PartialEq, V: PartialEq> PartialEq for BSTMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // We can't just compare the binary trees structurally, since they may be structured
        // differently while still having all the same elements (e.g. if insertion order is
        // different). Instead, we use in-order traversal since we know that that is guaranteed to
        // produce the elements in sorted order. If their sorted orders are equal, the maps are
        // equal.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|((k1, v1), (k2, v2))| {
            k1.eq(k2) && v1.eq(v2)
        })
    }
}

impl<K: Ord + Eq, V: Eq> Eq for BSTMap<K, V> {}

impl<K: Ord, V> BSTMap<K, V> {
    /// Creates an empty `BSTMap`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    /// let mut map: BSTMap<&str, i32> = BSTMap::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the map (i.e. the number of nodes in the binary search
    /// tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Returns a reference to the value corresponding to the given key, or `None` if no such key
    /// exists in the binary search tree
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a key-value pair corresponding to the given key, or `None` if no such key exists in
    /// the binary search tree
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_entry(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_entry(&2), None);
    /// ```
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some((node.key(), node.value())),
            }
        }

        None
    }

    /// Inserts a new entry into the binary search tree
    ///
    /// If the key is already present, the tree is left unchanged and the given value is returned
    /// back as `Some(value)`. Returns `None` if a new node was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// # assert!(map.is_empty());
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// assert_eq!(map.insert(37, "b"), Some("b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut current = match self.root.as_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Node::new(key, value));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                return None;
            },
        };

        while let Some(node) = current.take() {
            match key.cmp(node.key()) {
                Ordering::Less => {
                    // Key not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Node::new(key, value));
                        self.len += 1;
                        break;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Key not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Node::new(key, value));
                        self.len += 1;
                        break;
                    }
                    current = node.right_mut();
                },

                // First write wins
                Ordering::Equal => return Some(value),
            }
        }

        None
    }

    /// Clears the map, removing all elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// An empty tree has height 0. A tree built from sorted keys has a height equal to its length.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let balanced: BSTMap<_, _> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let degenerate: BSTMap<_, _> = vec![(1, ()), (2, ()), (3, ())].into_iter().collect();
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K, V>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.iter()
                .flat_map(|&node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// Performs an in-order traversal of the tree, yielding entries in ascending key order
    ///
    /// The iterator borrows the map, so it can be created again any number of times and will
    /// produce the same sequence as long as the map is not modified in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::BSTMap;
    ///
    /// let map: BSTMap<_, _> = vec![(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// let keys: Vec<_> = map.iter_inorder().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<K, V> {
        IterInorder::new(self.root(), self.len)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root is whichever key was inserted first. For a guaranteed ordering, use
    /// `iter_inorder`.
    ///
    /// This is a low-level API meant to be used for implementing traversals. The inner structure of
    /// the tree can be anything that satisfies the BST properties.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_ref()
    }
}

impl<K: Ord, V> Extend<(K, V)> for BSTMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BSTMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
