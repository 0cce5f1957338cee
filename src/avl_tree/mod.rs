//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod level;
mod node;
mod set;
mod tree;

pub use self::level::{Level, Levels, Slot};
pub use self::set::AvlTree;

use std::error;
use std::fmt;
use std::result;

/// Outcomes reported by lookups and traversals that have nothing to return.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The searched key is not stored in the tree.
    NotFound,
    /// A traversal was requested on a tree without a root.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "key not found"),
            Error::EmptyTree => write!(f, "tree is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
