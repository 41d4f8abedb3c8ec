use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ordtree::{balanced, ordered};

#[derive(Clone)]
enum TreeEnum<T> {
    Ordered(ordered::Tree<T>),
    Balanced(balanced::Tree<T>),
}

impl<T> TreeEnum<T> {
    fn contains(&self, k: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Ordered(t) => t.contains(k),
            Self::Balanced(t) => t.contains(k),
        }
    }

    fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        match self {
            Self::Ordered(t) => t.insert(element),
            Self::Balanced(t) => t.insert(element),
        }
    }

    fn remove(&mut self, k: &T)
    where
        T: Ord,
    {
        match self {
            Self::Ordered(t) => {
                t.remove(k);
            }
            Self::Balanced(t) => {
                t.remove(k);
            }
        }
    }
}

/// Returns `0..n` in a deterministic shuffled order. Both trees are built
/// from shuffled input so the unbalanced tree gets its expected-case shape
/// rather than degenerating into a chain.
fn shuffled_elements(n: usize, seed: u64) -> Vec<i32> {
    let mut xs: Vec<i32> = (0..n as i32).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    xs.shuffle(&mut rng);
    xs
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;
        let elements = shuffled_elements(num_nodes, 214);

        let ordered_tree = {
            let mut tree = ordered::Tree::new();
            for x in &elements {
                tree.insert(*x);
            }
            tree
        };
        let balanced_tree = {
            let mut tree = balanced::Tree::new();
            for x in &elements {
                tree.insert(*x);
            }
            tree
        };
        let tree_tests = [
            ("ordered", TreeEnum::Ordered(ordered_tree)),
            ("balanced", TreeEnum::Balanced(balanced_tree)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.remove(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
