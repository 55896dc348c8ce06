//! BST Workout: Insert/Remove Churn and Rebalancing
//!
//! Drives the binary search tree through a randomized workload,
//! verifies the sorted-traversal invariant, then rebalances and
//! reports the height reduction with wall-clock timings.

use std::time::Instant;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use geo_solvers::Bst;

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  geo-solvers: BST Workout");
    println!("═══════════════════════════════════════════════════════════════\n");

    let n_inserts = 200_000;
    let n_removes = 50_000;

    let mut rng = rand::rng();
    // Gaussian keys cluster around the mean, which makes for a lopsided
    // tree and an interesting rebalance.
    let keys = match Normal::new(0.0, 1_000_000.0) {
        Ok(dist) => dist,
        Err(e) => {
            eprintln!("bad distribution parameters: {e}");
            return;
        }
    };

    println!("Inserting {n_inserts} Gaussian keys...");
    let mut tree: Bst<i64> = Bst::new();
    let start = Instant::now();
    let mut accepted = 0usize;
    for _ in 0..n_inserts {
        if tree.insert(keys.sample(&mut rng) as i64) {
            accepted += 1;
        }
    }
    let insert_time = start.elapsed();
    println!(
        "  {} unique keys in {:.3} ms (height {})",
        accepted,
        insert_time.as_secs_f64() * 1e3,
        tree.height()
    );

    println!("\nRemoving {n_removes} random keys...");
    let start = Instant::now();
    let mut removed = 0usize;
    for _ in 0..n_removes {
        let probe = keys.sample(&mut rng) as i64;
        if tree.remove(&probe).is_some() {
            removed += 1;
        }
    }
    println!(
        "  {} removed in {:.3} ms, {} remain",
        removed,
        start.elapsed().as_secs_f64() * 1e3,
        tree.len()
    );

    // Invariant check: in-order traversal must be strictly sorted.
    let in_order = tree.in_order();
    let sorted = in_order.windows(2).all(|w| w[0] < w[1]);
    println!(
        "\nIn-order traversal sorted: {} ({} values)",
        sorted,
        in_order.len()
    );
    if !sorted {
        eprintln!("ordering invariant violated!");
        return;
    }

    println!("\nRebalancing...");
    let height_before = tree.height();
    let start = Instant::now();
    tree.rebalance();
    let rebalance_time = start.elapsed();

    let n = tree.len();
    let optimal = (n as f64 + 1.0).log2().ceil() as usize;
    println!(
        "  height {} → {} (optimal {}) in {:.3} ms",
        height_before,
        tree.height(),
        optimal,
        rebalance_time.as_secs_f64() * 1e3
    );
    println!("  balanced: {}", tree.is_balanced());

    // Spot-check membership after the rebuild.
    let mut hits = 0usize;
    let n_probes = 10_000;
    let start = Instant::now();
    for _ in 0..n_probes {
        if tree.contains(&(rng.random_range(-3_000_000..3_000_000))) {
            hits += 1;
        }
    }
    println!(
        "\n{} / {} random probes hit in {:.3} ms",
        hits,
        n_probes,
        start.elapsed().as_secs_f64() * 1e3
    );
}
