//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full MCTS search with varying iteration counts
//! - Search from different game states (opening, midgame, near-terminal)
//! - Tree operations (selection, backpropagation, best action)
//! - Random rollouts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use engine_core::GameState;
use games_tictactoe::{Action, State};
use mcts::{FlatPolicy, MctsSearch, MctsTree, RandomRollout, Rollout};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn engine() -> MctsSearch<RandomRollout, FlatPolicy> {
    MctsSearch::new(RandomRollout::new(), 1.414, FlatPolicy::new())
}

// =============================================================================
// Full MCTS Search Benchmarks
// =============================================================================

fn bench_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search_iterations");
    let search = engine();

    for iterations in [50u32, 100, 300, 1000, 3000] {
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            BenchmarkId::new("tictactoe", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    black_box(search.search_by_iterations(State::new(), iterations, &mut rng))
                });
            },
        );
    }

    group.finish();
}

fn bench_search_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_game_phases");
    let search = engine();
    let iterations = 300u32;

    let phases = [
        ("opening", State::new()),
        // X at 4, O at 0, X at 2, O at 6
        ("midgame", State::from_moves(&[4, 0, 2, 6])),
        // X at 0, O at 3, X at 1, O at 4 -> X can win at 2
        ("near_terminal", State::from_moves(&[0, 3, 1, 4])),
    ];

    for (name, state) in phases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                black_box(search.search_by_iterations(state, iterations, &mut rng))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Tree Operation Benchmarks
// =============================================================================

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_tree_ops");

    group.bench_function("expand_root", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            let mut tree = MctsTree::new(State::new(), &mut rng);
            let root = tree.root();
            while tree.expand_next(root, &mut rng).is_some() {}
            black_box(tree.len())
        });
    });

    group.bench_function("select_child", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut tree = MctsTree::new(State::new(), &mut rng);
        let root = tree.root();

        for pos in 0..9u8 {
            let child_id = tree.add_child(root, Action::Place(pos), &mut rng);
            let child = tree.get_mut(child_id);
            child.visit_count = (pos as u32 + 1) * 10;
            child.wins = child.visit_count as f32 * (pos as f32 / 9.0);
        }
        tree.get_mut(root).visit_count = 450;

        b.iter(|| black_box(tree.select_child(root, 1.414)));
    });

    group.bench_function("backpropagate_depth_5", |b| {
        b.iter_batched(
            || {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let mut tree = MctsTree::new(State::new(), &mut rng);
                let mut parent = tree.root();
                for pos in 0..5u8 {
                    parent = tree.add_child(parent, Action::Place(pos), &mut rng);
                }
                (tree, parent)
            },
            |(mut tree, leaf)| {
                tree.backpropagate(leaf, 1.0);
                black_box(tree)
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("best_action", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut tree = MctsTree::new(State::new(), &mut rng);
        let root = tree.root();
        for pos in 0..9u8 {
            let child_id = tree.add_child(root, Action::Place(pos), &mut rng);
            tree.backpropagate(child_id, pos as f32 / 9.0);
        }

        b.iter(|| black_box(tree.best_action().copied()));
    });

    group.finish();
}

// =============================================================================
// Rollout Benchmarks
// =============================================================================

fn bench_rollout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollout");
    let rollout = RandomRollout::new();

    group.bench_function("random_from_opening", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = State::new();
        b.iter(|| black_box(rollout.rollout(&state, &mut rng)));
    });

    group.bench_function("legal_actions", |b| {
        let state = State::from_moves(&[4, 0, 2]);
        b.iter(|| black_box(state.legal_actions()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_iterations,
    bench_search_game_phases,
    bench_tree_operations,
    bench_rollout,
);
criterion_main!(benches);
