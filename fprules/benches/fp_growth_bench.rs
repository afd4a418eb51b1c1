use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fprules::fp::{FPTree, Item, find_association_rules, mine_frequent_itemsets};
use rand::Rng;

/// Generate synthetic transactions
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<Item>> {
    let mut rng = rand::thread_rng();
    let mut transactions = Vec::with_capacity(num_transactions);

    for _ in 0..num_transactions {
        // Decide how many items in this transaction
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        // Randomly select items (weighted by density)
        let mut transaction: Vec<Item> = Vec::with_capacity(num_items_in_tx);
        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                transaction.push(rng.gen_range(0..num_items) as Item);
            }
        }
        transaction.sort_unstable();
        transaction.dedup();
        transactions.push(transaction);
    }

    transactions
}

fn min_count(num_transactions: usize, min_support: f64) -> usize {
    (min_support * num_transactions as f64) as usize
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let threshold = min_count(num_tx, 0.1);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| {
                let tree = FPTree::build(black_box(threshold), black_box(tx));
                mine_frequent_itemsets(tree)
            });
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let threshold = min_count(transactions.len(), min_sup);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &threshold,
            |b, &threshold| {
                b.iter(|| mine_frequent_itemsets(FPTree::build(threshold, black_box(&transactions))));
            },
        );
    }

    group.finish();
}

/// Rule mining cost is dominated by support queries against the full tree
fn bench_rule_mining(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_mining");

    let transactions = generate_transactions(1000, 30, 8, 0.8);
    let tree = FPTree::build(min_count(transactions.len(), 0.1), &transactions);
    let itemsets = mine_frequent_itemsets(tree.clone()).unwrap();

    for &min_conf in &[0.3, 0.6, 0.9] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.1}", min_conf)),
            &min_conf,
            |b, &conf| {
                b.iter(|| find_association_rules(black_box(&itemsets), &tree, conf));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_rule_mining
);
criterion_main!(benches);
