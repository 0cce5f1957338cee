use crate::avl_tree::level::{Level, Levels};
use crate::avl_tree::tree::{self, Tree};
use crate::avl_tree::{Error, Result};

/// An ordered container implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Keys that compare equal to a
/// stored key are kept alongside it in its right subtree, so the tree may hold duplicates.
///
/// # Examples
/// ```
/// use balanced_tree::avl_tree::{AvlTree, Error};
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.search(&3), Ok(&3));
///
/// assert_eq!(tree.delete(&0), Some(0));
/// assert_eq!(tree.search(&0), Err(Error::NotFound));
/// ```
pub struct AvlTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a key into the tree. A key equal to one already stored is inserted again rather
    /// than replacing it.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        self.root = Some(tree::insert(self.root.take(), key));
        self.len += 1;
        debug!("Inserted key, tree now holds {} keys with height {}", self.len, self.height());
    }

    /// Deletes a key from the tree. If the key exists, the removed key is returned. Deleting a
    /// key that does not exist leaves the tree unchanged and returns `None`.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let (root, ret) = tree::remove(self.root.take(), key);
        self.root = root;
        match ret {
            Some(_) => {
                self.len -= 1;
                debug!("Deleted key, tree now holds {} keys with height {}", self.len, self.height());
            },
            None => debug!("Key to delete was not found"),
        }
        ret
    }

    /// Searches the tree for a key. Returns the stored key, or `Error::NotFound` if no stored
    /// key is equal to it.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Ok(&1));
    /// assert_eq!(tree.search(&2), Err(Error::NotFound));
    /// ```
    pub fn search(&self, key: &T) -> Result<&T> {
        tree::get(&self.root, key).ok_or(Error::NotFound)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_ok()
    }

    /// Returns the number of keys in the tree, counting duplicates.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree. A tree with a single key has height 1 and an empty tree
    /// has height 0.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &tree::min_node(node).key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &tree::max_node(node).key)
    }

    /// Returns a lazy iterator over the levels of the tree, starting at the root. Returns
    /// `Error::EmptyTree` if the tree has no keys.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut levels = tree.levels().unwrap();
    /// assert_eq!(levels.next().unwrap().to_string(), "Level 0: 2");
    /// assert_eq!(levels.next().unwrap().to_string(), "Level 1: 1 N");
    /// ```
    pub fn levels(&self) -> Result<Levels<T>> {
        match self.root {
            Some(_) => Ok(Levels::new(&self.root)),
            None => Err(Error::EmptyTree),
        }
    }

    /// Returns every level of the tree in breadth-first order. Returns `Error::EmptyTree` if the
    /// tree has no keys.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{AvlTree, Error, Slot};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.render_levels(), Err(Error::EmptyTree));
    ///
    /// tree.insert(1);
    /// let levels = tree.render_levels().unwrap();
    /// assert_eq!(levels[0].slots, vec![Slot::Key(&1)]);
    /// ```
    pub fn render_levels(&self) -> Result<Vec<Level<T>>> {
        Ok(self.levels()?.collect())
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
