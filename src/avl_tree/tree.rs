use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => (**node).height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

pub fn min_node<T>(node: &Node<T>) -> &Node<T> {
    let mut curr = node;
    while let Some(ref left_node) = curr.left {
        curr = left_node;
    }
    curr
}

pub fn max_node<T>(node: &Node<T>) -> &Node<T> {
    let mut curr = node;
    while let Some(ref right_node) = curr.right {
        curr = right_node;
    }
    curr
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left around a node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right around a node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Equal keys descend right, matching the routing in `insert`.
fn descends_left<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => *key < node.key,
        None => false,
    }
}

// Rebalances after an insertion using the side the new key took below the heavy child.
fn balance_inserted<T>(mut node: Box<Node<T>>, inner_left: bool) -> Box<Node<T>> {
    node.update();

    if node.balance() > 1 {
        if !inner_left {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if node.balance() < -1 {
        if inner_left {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

// Rebalances after a removal using the balance of the heavy child.
fn balance_removed<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    if node.balance() > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if node.balance() < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

// Detaches the minimum node of a subtree, rebalancing every frame on the way back up.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.left.take() {
        Some(left_node) => {
            let (left, min) = remove_min(left_node);
            node.left = left;
            (Some(balance_removed(node)), min)
        },
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        },
    }
}

pub fn insert<T>(tree: Tree<T>, key: T) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return Box::new(Node::new(key)),
    };

    let inner_left;
    if key < node.key {
        inner_left = descends_left(&node.left, &key);
        node.left = Some(insert(node.left.take(), key));
    } else {
        inner_left = descends_left(&node.right, &key);
        node.right = Some(insert(node.right.take(), key));
    }

    balance_inserted(node, inner_left)
}

pub fn remove<T>(tree: Tree<T>, key: &T) -> (Tree<T>, Option<T>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let ret = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, ret) = remove(node.left.take(), key);
            node.left = left;
            ret
        },
        Ordering::Greater => {
            let (right, ret) = remove(node.right.take(), key);
            node.right = right;
            ret
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                let Node { key: removed, .. } = *node;
                return (right, Some(removed));
            },
            (left, None) => {
                let Node { key: removed, .. } = *node;
                return (left, Some(removed));
            },
            (left, Some(right_node)) => {
                let (right, successor) = remove_min(right_node);
                node.left = left;
                node.right = right;
                Some(mem::replace(&mut node.key, successor))
            },
        },
    };

    (Some(balance_removed(node)), ret)
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}
