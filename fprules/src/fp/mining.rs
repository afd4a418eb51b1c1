use super::rules::{Rule, find_association_rules};
use super::tree::{FPTree, Item};
use crate::config::MiningConfig;
use crate::error::{MiningError, Result};
use std::collections::BTreeSet;
use tracing::{debug, trace};

pub type Itemset = BTreeSet<Item>;

enum Task {
    Mine { tree: FPTree, suffix: Vec<Item> },
    Emit(Itemset),
}

/// Frequent itemsets of `tree`, consuming it.
///
/// Each step removes the least frequent leaf-only item `z`: itemsets
/// containing `z` come from the conditional pattern base of `z`, the rest from
/// the tree with `z` removed. Results appear in that order, conditional
/// results first, then `{z}`, then the remainder. Pending trees sit on an
/// explicit stack instead of the call stack.
///
/// Fails with [`MiningError::NoLeafItem`] when a tree has several items but
/// none of them occurs only at leaves. Transactions that repeat a frequent
/// item can produce such a tree.
pub fn mine_frequent_itemsets(tree: FPTree) -> Result<Vec<Itemset>, MiningError> {
    let mut itemsets = Vec::new();
    let mut stack = vec![Task::Mine {
        tree,
        suffix: Vec::new(),
    }];

    while let Some(task) = stack.pop() {
        let (mut tree, suffix) = match task {
            Task::Emit(itemset) => {
                itemsets.push(itemset);
                continue;
            }
            Task::Mine { tree, suffix } => (tree, suffix),
        };

        tree.remove_infrequent_items()?;
        if tree.is_empty() {
            continue;
        }
        if tree.contains_one_item() {
            itemsets.extend(tree.roots().map(|root| with_suffix(&suffix, root.item)));
            continue;
        }

        let z = tree.get_least_item().ok_or(MiningError::NoLeafItem)?;
        trace!(z, depth = suffix.len(), "splitting on least item");

        let base = tree.get_conditional_pattern_base(z)?;
        tree.remove_item(z)?;

        let mut extended = suffix.clone();
        extended.push(z);

        stack.push(Task::Mine { tree, suffix });
        stack.push(Task::Emit(extended.iter().copied().collect()));
        stack.push(Task::Mine {
            tree: base,
            suffix: extended,
        });
    }

    debug!(itemsets = itemsets.len(), "mined frequent itemsets");
    Ok(itemsets)
}

fn with_suffix(suffix: &[Item], item: Item) -> Itemset {
    suffix.iter().copied().chain(std::iter::once(item)).collect()
}

/// A built tree plus the threshold it was built with.
///
/// The tree is kept unpruned so supports can be queried after mining.
pub struct FpGrowth {
    tree: FPTree,
    num_transactions: usize,
}

impl FpGrowth {
    pub fn new<T: AsRef<[Item]>>(transactions: &[T], config: &MiningConfig) -> Result<Self> {
        config.validate()?;
        let num_transactions = transactions.len();
        let min_support = config.min_support.to_count(num_transactions);
        debug!(num_transactions, min_support, "building fp-tree");

        Ok(Self {
            tree: FPTree::build(min_support, transactions),
            num_transactions,
        })
    }

    pub fn tree(&self) -> &FPTree {
        &self.tree
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn min_support(&self) -> usize {
        self.tree.min_support()
    }

    pub fn frequent_itemsets(&self) -> Result<Vec<Itemset>, MiningError> {
        mine_frequent_itemsets(self.tree.clone())
    }

    pub fn association_rules(
        &self,
        itemsets: &[Itemset],
        min_confidence: f64,
    ) -> Result<Vec<Rule>, MiningError> {
        find_association_rules(itemsets, &self.tree, min_confidence)
    }
}

#[derive(Debug)]
pub struct MiningOutcome {
    pub itemsets: Vec<Itemset>,
    pub rules: Vec<Rule>,
    pub num_transactions: usize,
    pub min_support: usize,
}

pub fn fp_growth_algorithm<T: AsRef<[Item]>>(
    transactions: &[T],
    config: &MiningConfig,
) -> Result<MiningOutcome> {
    let growth = FpGrowth::new(transactions, config)?;
    let itemsets = growth.frequent_itemsets()?;
    let rules = growth.association_rules(&itemsets, config.min_confidence)?;

    Ok(MiningOutcome {
        itemsets,
        rules,
        num_transactions: growth.num_transactions(),
        min_support: growth.min_support(),
    })
}
