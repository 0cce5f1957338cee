extern crate balanced_tree;

use balanced_tree::avl_tree::AvlTree;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::str::FromStr;

const KEYS: [u32; 13] = [50, 25, 75, 15, 35, 60, 120, 10, 68, 90, 125, 83, 100];

fn initialize_logging() {
    let level = env::args()
        .nth(1)
        .and_then(|arg| LevelFilter::from_str(&arg).ok())
        .unwrap_or(LevelFilter::Info);

    if let Err(error) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Could not initialize logging: {}", error);
    }
}

fn print_levels(tree: &AvlTree<u32>) {
    match tree.levels() {
        Ok(levels) => {
            for level in levels {
                println!("{}", level);
            }
        },
        Err(error) => println!("Fail, {}.", error),
    }
}

fn print_search(tree: &AvlTree<u32>, key: u32) {
    match tree.search(&key) {
        Ok(found) => println!("Search for {}: {}", key, found),
        Err(error) => println!("Search for {}: {}", key, error),
    }
}

fn main() {
    initialize_logging();

    let mut tree = AvlTree::new();
    print_levels(&tree);

    for key in KEYS.iter() {
        tree.insert(*key);
    }
    info!("Built tree of {} keys with height {}", tree.len(), tree.height());

    print_levels(&tree);
    print_search(&tree, 125);

    tree.delete(&125);
    println!("\nKey 125 deleted.");
    print_levels(&tree);
    print_search(&tree, 125);

    tree.insert(123);
    println!("\nKey 123 inserted.");
    print_levels(&tree);
    print_search(&tree, 123);
}
