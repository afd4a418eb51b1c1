pub mod builder;
pub mod mining;
pub mod rules;
pub mod storage;
pub mod tree;


pub use builder::{ItemOrder, transactions_from_matrix};
pub use mining::{FpGrowth, Itemset, MiningOutcome, fp_growth_algorithm, mine_frequent_itemsets};
pub use rules::{ItemsetDisplay, Rule, RuleMiner, confidence, find_association_rules, mine_rules};
pub use storage::{FrequentLevel, ItemsetStorage, group_by_level};
pub use tree::{FPNode, FPTree, HeaderEntry, Item, NodeId};
