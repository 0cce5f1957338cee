#[macro_use]
extern crate log;

pub mod avl_tree;
