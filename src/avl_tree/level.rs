use crate::avl_tree::tree::Tree;
use std::collections::VecDeque;
use std::fmt;

/// A position in a level of the tree: either a stored key or a missing child.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T>
where
    T: 'a,
{
    Key(&'a T),
    Absent,
}

impl<'a, T> fmt::Display for Slot<'a, T>
where
    T: 'a + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Key(key) => write!(f, "{}", key),
            Slot::Absent => write!(f, "N"),
        }
    }
}

/// All slots at one depth of the tree, ordered from left to right.
///
/// Every present node contributes both of its children to the next level, so a missing child
/// shows up as `Slot::Absent` and the shape of the tree can be read back from the levels.
#[derive(Debug, PartialEq, Eq)]
pub struct Level<'a, T>
where
    T: 'a,
{
    pub depth: usize,
    pub slots: Vec<Slot<'a, T>>,
}

impl<'a, T> Level<'a, T>
where
    T: 'a,
{
    /// Returns the keys of the level, skipping absent slots.
    pub fn keys(&self) -> Vec<&'a T> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Key(key) => Some(*key),
                Slot::Absent => None,
            })
            .collect()
    }
}

impl<'a, T> fmt::Display for Level<'a, T>
where
    T: 'a + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Level {}:", self.depth)?;
        for slot in &self.slots {
            write!(f, " {}", slot)?;
        }
        Ok(())
    }
}

/// A lazy breadth-first iterator over the levels of an avl tree.
///
/// Each call to `next` drains the queue of exactly one depth and enqueues the children of the
/// nodes it found.
pub struct Levels<'a, T>
where
    T: 'a,
{
    queue: VecDeque<(&'a Tree<T>, usize)>,
}

impl<'a, T> Levels<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));
        Levels { queue }
    }
}

impl<'a, T> Iterator for Levels<'a, T>
where
    T: 'a,
{
    type Item = Level<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let depth = match self.queue.front() {
            Some(&(_, depth)) => depth,
            None => return None,
        };

        let mut slots = Vec::new();
        while let Some(&(tree, curr_depth)) = self.queue.front() {
            if curr_depth != depth {
                break;
            }
            self.queue.pop_front();

            match tree {
                Some(ref node) => {
                    slots.push(Slot::Key(&node.key));
                    self.queue.push_back((&node.left, depth + 1));
                    self.queue.push_back((&node.right, depth + 1));
                },
                None => slots.push(Slot::Absent),
            }
        }

        Some(Level { depth, slots })
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, Levels, Slot};
    use crate::avl_tree::tree::{self, Tree};

    #[test]
    fn test_single_node() {
        let root: Tree<u32> = Some(tree::insert(None, 1));
        let levels = Levels::new(&root).collect::<Vec<Level<u32>>>();

        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].slots, vec![Slot::Key(&1)]);
        assert_eq!(levels[1].slots, vec![Slot::Absent, Slot::Absent]);
    }

    #[test]
    fn test_display() {
        let mut root: Tree<u32> = None;
        for key in &[2, 1, 3, 4] {
            root = Some(tree::insert(root, *key));
        }

        let lines = Levels::new(&root)
            .map(|level| level.to_string())
            .collect::<Vec<String>>();
        assert_eq!(
            lines,
            vec![
                "Level 0: 2",
                "Level 1: 1 3",
                "Level 2: N N N 4",
                "Level 3: N N",
            ],
        );
    }

    #[test]
    fn test_keys_skips_absent() {
        let mut root: Tree<u32> = None;
        for key in &[2, 1, 3, 4] {
            root = Some(tree::insert(root, *key));
        }

        let levels = Levels::new(&root).collect::<Vec<Level<u32>>>();
        assert_eq!(levels[2].keys(), vec![&4]);
    }

    #[test]
    fn test_traversal_is_read_only() {
        let mut root: Tree<u32> = None;
        for key in 0..10 {
            root = Some(tree::insert(root, key));
        }

        let before = tree::height(&root);
        assert_eq!(Levels::new(&root).count(), before + 1);
        assert_eq!(tree::height(&root), before);
    }
}
