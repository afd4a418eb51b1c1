use anyhow::Context;
use fprules::io::read_transactions;
use fprules::report::{summarize_itemsets, summarize_rules};
use fprules::{FpGrowth, MiningConfig};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("fpmine", String::as_str);
    format!("Usage: {program} data_file support[0-1] confidence[0-1]")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("{}", usage(&args));
        std::process::exit(1);
    }

    let support: f64 = args[2]
        .parse()
        .with_context(|| format!("invalid support {:?}", args[2]))?;
    let confidence: f64 = args[3]
        .parse()
        .with_context(|| format!("invalid confidence {:?}", args[3]))?;
    let config = MiningConfig::new(support, confidence);

    let transactions = read_transactions(&args[1])
        .with_context(|| format!("reading {}", args[1]))?;
    let total = transactions.len();

    let start = Instant::now();
    let growth = FpGrowth::new(&transactions, &config)?;
    let itemsets = growth.frequent_itemsets()?;
    info!(
        itemsets = itemsets.len(),
        elapsed = ?start.elapsed(),
        "found frequent itemsets"
    );

    for summary in summarize_itemsets(&itemsets, growth.tree(), total)? {
        println!("{summary}");
    }
    println!("=============================================");

    let start = Instant::now();
    let rules = growth.association_rules(&itemsets, config.min_confidence)?;
    info!(rules = rules.len(), elapsed = ?start.elapsed(), "found association rules");

    for summary in summarize_rules(&rules, growth.tree(), total)? {
        println!("{summary}");
    }

    Ok(())
}
