use fprules::fp::{FPTree, Item, find_association_rules, mine_frequent_itemsets};
use rand::Rng;
use std::time::Instant;

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<Item>> {
    let mut rng = rand::thread_rng();
    let mut transactions = Vec::with_capacity(num_transactions);

    for _ in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        let mut transaction = Vec::with_capacity(num_items_in_tx);
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

fn stress_test_scaling() {
    println!("\n=== Scaling Stress Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let min_support = num_tx / 10;

        let start = Instant::now();
        let tree = FPTree::build(min_support, &transactions);
        println!("  Build: {:?} ({} nodes)", start.elapsed(), tree.len());

        let start = Instant::now();
        match mine_frequent_itemsets(tree.clone()) {
            Ok(itemsets) => {
                println!("  Mine: {:?} ({} itemsets)", start.elapsed(), itemsets.len());

                let start = Instant::now();
                match find_association_rules(&itemsets, &tree, 0.8) {
                    Ok(rules) => println!("  Rules: {:?} ({} rules)", start.elapsed(), rules.len()),
                    Err(e) => println!("  Rules failed: {}", e),
                }
            }
            Err(e) => println!("  Mine failed: {}", e),
        }
    }
}

fn stress_test_many_items() {
    println!("\n=== Many Items Stress Test ===");

    // Overlapping pairs: one split per item, few itemsets per split
    for num_items in [1_000 as Item, 5_000, 10_000] {
        let transactions: Vec<Vec<Item>> = (0..num_items)
            .flat_map(|i| [vec![i, i + 1], vec![i, i + 1]])
            .collect();

        let start = Instant::now();
        let tree = FPTree::build(2, &transactions);
        match mine_frequent_itemsets(tree) {
            Ok(itemsets) => println!(
                "  {} items: {:?} ({} itemsets)",
                num_items,
                start.elapsed(),
                itemsets.len()
            ),
            Err(e) => println!("  {} items failed: {}", num_items, e),
        }
    }
}

fn main() {
    stress_test_scaling();
    stress_test_many_items();
}
