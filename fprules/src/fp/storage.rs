use super::mining::Itemset;
use super::tree::{FPTree, Item};
use crate::error::MiningError;

/// Memory-efficient itemset storage using flat arrays
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<Item>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Itemsets of one size, stored flat
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset_with_support(&mut self, mut items: Vec<Item>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn supports(&self) -> &[usize] {
        &self.supports
    }

    /// Items laid out row by row; valid as a matrix when all itemsets have the same size.
    pub fn flat_items(&self) -> &[Item] {
        &self.items
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<Item>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset_with_support(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn flat_items(&self) -> &[Item] {
        self.storage.flat_items()
    }

    pub fn supports(&self) -> &[usize] {
        self.storage.supports()
    }
}

/// Group itemsets by size; level `k - 1` holds the itemsets of size `k`.
pub fn group_by_level(itemsets: &[Itemset], tree: &FPTree) -> Result<Vec<FrequentLevel>, MiningError> {
    let mut levels: Vec<FrequentLevel> = Vec::new();

    for itemset in itemsets.iter().filter(|itemset| !itemset.is_empty()) {
        let size = itemset.len();
        while levels.len() < size {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        let support = tree.get_support(itemset)?;
        levels[size - 1].add_itemset_with_support(itemset.iter().copied().collect(), support);
    }

    Ok(levels)
}
