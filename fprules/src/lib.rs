//! Frequent itemset and association rule mining with FP-Growth.
//!
//! Transactions are compressed into an [`FPTree`](fp::FPTree): a forest of
//! prefix-sharing paths plus a header table chaining every node of an item.
//! [`mine_frequent_itemsets`](fp::mine_frequent_itemsets) repeatedly splits the
//! tree on its least frequent leaf-only item, and
//! [`find_association_rules`](fp::find_association_rules) derives rules from
//! the resulting itemsets using support queries against the original tree.
//!
//! ```
//! use fprules::{MiningConfig, fp_growth_algorithm};
//!
//! let transactions = vec![vec![1, 2, 3], vec![1, 3], vec![1, 4]];
//! let config = MiningConfig::new(0.67, 0.5);
//! let outcome = fp_growth_algorithm(&transactions, &config).unwrap();
//! assert_eq!(outcome.min_support, 2);
//! assert_eq!(outcome.itemsets.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod io;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use config::{MinSupport, MiningConfig};
pub use error::{ConfigError, Error, InputError, MiningError, Result};
pub use fp::{
    FPTree, FpGrowth, Item, Itemset, MiningOutcome, Rule, find_association_rules,
    fp_growth_algorithm, mine_frequent_itemsets,
};
