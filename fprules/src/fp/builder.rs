use super::tree::{FPTree, Item};
use crate::error::MiningError;
use ndarray::ArrayView2;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Canonical item order for one build: support descending, then item id
/// descending.
pub struct ItemOrder {
    counts: HashMap<Item, usize>,
}

impl ItemOrder {
    pub fn from_weighted<T: AsRef<[Item]>>(transactions: &[(T, usize)]) -> Self {
        let mut counts: HashMap<Item, usize> = HashMap::new();
        for (transaction, weight) in transactions {
            for &item in transaction.as_ref() {
                *counts.entry(item).or_insert(0) += weight;
            }
        }
        Self { counts }
    }

    pub fn count(&self, item: Item) -> usize {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    pub fn compare(&self, a: Item, b: Item) -> Ordering {
        self.count(b)
            .cmp(&self.count(a))
            .then_with(|| b.cmp(&a))
    }

    /// Drop items below `min_support` and sort the rest canonically.
    pub fn canonicalize(&self, transaction: &[Item], min_support: usize) -> Vec<Item> {
        let mut items: Vec<Item> = transaction
            .iter()
            .copied()
            .filter(|&item| self.count(item) >= min_support)
            .collect();
        items.sort_by(|&a, &b| self.compare(a, b));
        items
    }
}

impl FPTree {
    /// Build a tree from a transaction batch.
    ///
    /// Items below the minimum support never reach the tree or its header.
    /// Transactions left empty after filtering are dropped.
    pub fn build<T: AsRef<[Item]>>(min_support: usize, transactions: &[T]) -> Self {
        let weighted: Vec<(&[Item], usize)> = transactions
            .iter()
            .map(|transaction| (transaction.as_ref(), 1))
            .collect();
        Self::build_weighted(min_support, &weighted)
    }

    /// Build from transactions that each stand for `weight` identical copies.
    pub fn build_weighted<T: AsRef<[Item]>>(min_support: usize, transactions: &[(T, usize)]) -> Self {
        let order = ItemOrder::from_weighted(transactions);
        let mut tree = FPTree::new(min_support);

        for (transaction, weight) in transactions {
            let items = order.canonicalize(transaction.as_ref(), min_support);
            if !items.is_empty() {
                tree.insert_weighted(&items, *weight);
            }
        }

        debug!(
            transactions = transactions.len(),
            items = tree.header.len(),
            nodes = tree.nodes.len(),
            "built fp-tree"
        );
        tree
    }

    /// Tree over the prefix paths leading to every occurrence of `item`.
    ///
    /// Each path counts as many times as its occurrence does. The new tree
    /// uses the same minimum support and shares nothing with `self`.
    pub fn get_conditional_pattern_base(&self, item: Item) -> Result<FPTree, MiningError> {
        if !self.header.contains_key(&item) {
            return Err(MiningError::UnknownItem(item));
        }

        let paths: Vec<(Vec<Item>, usize)> = self
            .occurrence_ids(item)
            .map(|id| {
                let mut path: Vec<Item> = self.ancestors(id).map(|node| node.item).collect();
                path.reverse();
                (path, self.nodes[id].count)
            })
            .collect();

        Ok(FPTree::build_weighted(self.min_support, &paths))
    }
}

/// Rows of a dense 0/1 matrix as transactions; column index is the item id.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Vec<Vec<Item>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(column, _)| column as Item)
                .collect()
        })
        .collect()
}
