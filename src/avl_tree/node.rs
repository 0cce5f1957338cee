use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_is_leaf() {
        let node = Node::new(7);
        assert_eq!(node.key, 7);
        assert_eq!(node.height, 1);
        assert_eq!(node.balance(), 0);
        assert!(node.left.is_none() && node.right.is_none());
    }

    #[test]
    fn test_update_and_balance() {
        let mut node = Node::new(2);
        let mut left = Node::new(1);
        left.left = Some(Box::new(Node::new(0)));
        left.update();
        node.left = Some(Box::new(left));
        node.update();

        assert_eq!(node.height, 3);
        assert_eq!(node.balance(), 2);
    }
}
