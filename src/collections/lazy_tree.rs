use std::{
    cmp::Ordering,
    fmt::{self, Write},
};

use proptest::{collection::vec, prelude::*};

use crate::prelude::*;

/// Marker rendered in front of a tombstoned key.
pub const TOMBSTONE_MARKER: char = '*';

/// Value reported by the sentinel variants of `find_min`/`find_max` when no
/// live key exists.
pub const NO_KEY: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    key: Key,
    tombstone: bool,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: Key) -> Self {
        Self {
            key,
            tombstone: false,
            left: None,
            right: None,
        }
    }

    /// The key of this node, if it has not been deleted.
    fn live_key(&self) -> Option<Key> {
        (!self.tombstone).then_some(self.key)
    }
}

/// An unbalanced binary search tree with lazy deletion.
///
/// Deleting a key only marks its node with a tombstone: the node keeps its
/// place in the ordering, still counts towards [`len`](Self::len) and
/// [`height`](Self::height), and is rendered (prefixed with
/// [`TOMBSTONE_MARKER`]) by [`serialize`](Self::serialize). Re-inserting the
/// key clears the tombstone instead of allocating a new node, so the node
/// count never decreases.
///
/// The shape of the tree is exactly the one produced by the insertion
/// order, nothing is ever rebalanced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyTree {
    root: Option<Box<Node>>,
}

impl LazyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key`, failing with [`Error::KeyOutOfRange`] outside of
    /// `[1, 99]`.
    ///
    /// Returns whether the key was logically added, that is `false` only
    /// when it was already present and live.
    pub fn insert(&mut self, key: i64) -> Result<bool> {
        Ok(self.insert_key(Key::new(key)?))
    }

    pub fn insert_key(&mut self, key: Key) -> bool {
        fn insert_recursive(slot: &mut Option<Box<Node>>, key: Key) -> bool {
            match slot {
                None => {
                    *slot = Some(Box::new(Node::new(key)));
                    true
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => insert_recursive(&mut node.left, key),
                    Ordering::Greater => insert_recursive(&mut node.right, key),
                    Ordering::Equal if node.tombstone => {
                        node.tombstone = false;
                        true
                    }
                    Ordering::Equal => false,
                },
            }
        }

        insert_recursive(&mut self.root, key)
    }

    /// Marks `key` as deleted, failing with [`Error::KeyOutOfRange`] outside
    /// of `[1, 99]`.
    ///
    /// Returns `false` if the key is absent or already deleted.
    pub fn delete(&mut self, key: i64) -> Result<bool> {
        Ok(self.delete_key(Key::new(key)?))
    }

    pub fn delete_key(&mut self, key: Key) -> bool {
        match self.find_mut(key) {
            Some(node) if !node.tombstone => {
                node.tombstone = true;
                true
            }
            _ => false,
        }
    }

    /// Checks whether `key` is present and live, failing with
    /// [`Error::KeyOutOfRange`] outside of `[1, 99]`.
    pub fn contains(&self, key: i64) -> Result<bool> {
        Ok(self.contains_key(Key::new(key)?))
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.find(key).is_some_and(|node| !node.tombstone)
    }

    /// Smallest live key, scanning the whole tree since the leftmost node
    /// may be tombstoned.
    pub fn find_min(&self) -> Option<Key> {
        fn min_recursive(node: &Option<Box<Node>>) -> Option<Key> {
            let node = node.as_deref()?;

            [
                node.live_key(),
                min_recursive(&node.left),
                min_recursive(&node.right),
            ]
            .into_iter()
            .flatten()
            .min()
        }

        min_recursive(&self.root)
    }

    /// Largest live key, scanning the whole tree since the rightmost node
    /// may be tombstoned.
    pub fn find_max(&self) -> Option<Key> {
        fn max_recursive(node: &Option<Box<Node>>) -> Option<Key> {
            let node = node.as_deref()?;

            [
                node.live_key(),
                max_recursive(&node.left),
                max_recursive(&node.right),
            ]
            .into_iter()
            .flatten()
            .max()
        }

        max_recursive(&self.root)
    }

    /// [`find_min`](Self::find_min), with [`NO_KEY`] standing for "no live key".
    pub fn find_min_or_sentinel(&self) -> i64 {
        self.find_min().map_or(NO_KEY, |key| key.get())
    }

    /// [`find_max`](Self::find_max), with [`NO_KEY`] standing for "no live key".
    pub fn find_max_or_sentinel(&self) -> i64 {
        self.find_max().map_or(NO_KEY, |key| key.get())
    }

    /// Number of levels, counting tombstoned nodes. An empty tree has height 0.
    pub fn height(&self) -> usize {
        fn height_recursive(node: &Option<Box<Node>>) -> usize {
            match node {
                None => 0,
                Some(node) => 1 + height_recursive(&node.left).max(height_recursive(&node.right)),
            }
        }

        height_recursive(&self.root)
    }

    /// Number of nodes, counting tombstoned ones.
    pub fn len(&self) -> usize {
        fn len_recursive(node: &Option<Box<Node>>) -> usize {
            match node {
                None => 0,
                Some(node) => 1 + len_recursive(&node.left) + len_recursive(&node.right),
            }
        }

        len_recursive(&self.root)
    }

    /// Whether the tree has no nodes at all, live or tombstoned.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-order rendering of every node, e.g. `*50 30 20 70 `.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    fn find(&self, key: Key) -> Option<&Node> {
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
        }

        None
    }

    fn find_mut(&mut self, key: Key) -> Option<&mut Node> {
        let mut cursor = self.root.as_deref_mut();

        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => cursor = node.left.as_deref_mut(),
                Ordering::Greater => cursor = node.right.as_deref_mut(),
            }
        }

        None
    }
}

impl fmt::Display for LazyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_preorder(f: &mut fmt::Formatter<'_>, node: &Option<Box<Node>>) -> fmt::Result {
            let Some(node) = node else {
                return Ok(());
            };

            if node.tombstone {
                f.write_char(TOMBSTONE_MARKER)?;
            }
            write!(f, "{} ", node.key)?;

            write_preorder(f, &node.left)?;
            write_preorder(f, &node.right)
        }

        write_preorder(f, &self.root)
    }
}

impl Arbitrary for LazyTree {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Replays a random sequence of inserts and deletes, so every generated
    /// tree is reachable through the public API.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec((any::<bool>(), any::<Key>()), 0..64)
            .prop_map(|ops| {
                let mut tree = Self::new();

                for (is_insert, key) in ops {
                    if is_insert {
                        tree.insert_key(key);
                    } else {
                        tree.delete_key(key);
                    }
                }

                tree
            })
            .boxed()
    }
}
