use balanced_tree::avl_tree::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn random_keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_avl_tree_insert(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_tree insert", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(*key);
            }
        })
    });
}

fn bench_avl_tree_search(c: &mut Criterion) {
    let keys = random_keys();
    let mut tree = AvlTree::new();
    for key in &keys {
        tree.insert(*key);
    }

    c.bench_function("bench avl_tree search", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.search(key).is_ok());
            }
        })
    });
}

fn bench_avl_tree_delete(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench avl_tree delete", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(*key);
            }
            for key in &keys {
                black_box(tree.delete(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_avl_tree_insert,
    bench_avl_tree_search,
    bench_avl_tree_delete,
);
criterion_main!(benches);
