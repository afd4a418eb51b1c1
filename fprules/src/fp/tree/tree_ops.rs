use super::tree::{FPNode, FPTree, Item, NodeId};
use crate::error::MiningError;
use std::collections::BTreeSet;
use tracing::trace;

impl FPTree {
    /// Insert one canonically ordered transaction.
    pub fn insert(&mut self, transaction: &[Item]) {
        self.insert_weighted(transaction, 1);
    }

    /// Insert a canonically ordered transaction `weight` times at once.
    ///
    /// Header counts grow together with node counts, so the header stays equal
    /// to the sum over each occurrence list.
    pub fn insert_weighted(&mut self, transaction: &[Item], weight: usize) {
        let Some((&first, rest)) = transaction.split_first() else {
            return;
        };
        if weight == 0 {
            return;
        }

        let mut current = match self.roots.get(&first) {
            Some(&root) => {
                self.nodes[root].count += weight;
                root
            }
            None => {
                let root = self.push_node(first, weight, None);
                self.roots.insert(first, root);
                root
            }
        };
        self.header.entry(first).or_default().count += weight;

        for &item in rest {
            current = match self.nodes[current].children.get(&item) {
                Some(&child) => {
                    self.nodes[child].count += weight;
                    child
                }
                None => {
                    let child = self.push_node(item, weight, Some(current));
                    self.nodes[current].children.insert(item, child);
                    child
                }
            };
            self.header.entry(item).or_default().count += weight;
        }
    }

    fn push_node(&mut self, item: Item, count: usize, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(FPNode::new(item, count, parent));
        self.insert_header_link(id);
        id
    }

    /// Append `id` to the tail of its item's occurrence list.
    pub fn insert_header_link(&mut self, id: NodeId) {
        let item = self.nodes[id].item;
        let entry = self.header.entry(item).or_default();
        match entry.tail.replace(id) {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => entry.head = Some(id),
        }
    }

    /// Detach every occurrence of `item`, which must all be leaves.
    ///
    /// Roots left without transactions are dropped along with their header
    /// entries. The precondition is checked before anything is detached.
    pub fn remove_item(&mut self, item: Item) -> Result<(), MiningError> {
        if !self.header.contains_key(&item) {
            return Err(MiningError::UnknownItem(item));
        }
        let occurrences: Vec<NodeId> = self.occurrence_ids(item).collect();
        if let Some(node) = occurrences
            .iter()
            .map(|&id| &self.nodes[id])
            .find(|node| !node.is_leaf())
        {
            return Err(MiningError::NotALeaf {
                item,
                children: node.children.len(),
            });
        }

        for id in occurrences {
            match self.nodes[id].parent {
                Some(parent) => {
                    self.nodes[parent].children.remove(&item);
                }
                None => {
                    self.roots.remove(&item);
                }
            }
        }

        let exhausted: Vec<Item> = self
            .roots
            .iter()
            .filter(|&(_, &root)| self.nodes[root].count == 0)
            .map(|(&root_item, _)| root_item)
            .collect();
        for root_item in exhausted {
            self.roots.remove(&root_item);
            self.header.remove(&root_item);
        }

        self.header.remove(&item);
        trace!(item, "removed item");
        Ok(())
    }

    /// Remove every item below the minimum support, least frequent first.
    ///
    /// The ascending order is what makes each target a leaf by the time it is
    /// removed. Equal counts go by ascending item id.
    pub fn remove_infrequent_items(&mut self) -> Result<(), MiningError> {
        let mut infrequent: Vec<(Item, usize)> = self
            .header
            .iter()
            .filter(|(_, entry)| entry.count < self.min_support)
            .map(|(&item, entry)| (item, entry.count))
            .collect();
        infrequent.sort_by_key(|&(_, count)| count);

        for (item, _) in infrequent {
            self.remove_item(item)?;
        }
        Ok(())
    }

    /// Least frequent item among those occurring only at leaves.
    ///
    /// Equal counts go to the smallest item id. `None` when no item qualifies,
    /// which only an empty tree or a path repeating an item can produce.
    pub fn get_least_item(&self) -> Option<Item> {
        self.header
            .iter()
            .filter(|&(&item, _)| {
                self.occurrence_ids(item)
                    .all(|id| self.nodes[id].is_leaf())
            })
            .min_by_key(|(_, entry)| entry.count)
            .map(|(&item, _)| item)
    }

    /// Number of transactions in the tree containing every item of `itemset`.
    ///
    /// Walks the occurrence list of the least frequent member and checks each
    /// occurrence's path towards the root for the remaining members.
    pub fn get_support<'a, I>(&self, itemset: I) -> Result<usize, MiningError>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let itemset: BTreeSet<Item> = itemset.into_iter().copied().collect();
        if itemset.is_empty() {
            return Err(MiningError::EmptyItemset);
        }
        if let Some(&missing) = itemset.iter().find(|item| !self.header.contains_key(item)) {
            return Err(MiningError::UnknownItem(missing));
        }

        let anchor = itemset
            .iter()
            .copied()
            .min_by_key(|item| self.header[item].count)
            .ok_or(MiningError::EmptyItemset)?;

        let mut rest = itemset;
        rest.remove(&anchor);

        let support = self
            .occurrence_ids(anchor)
            .filter(|&id| {
                let mut missing = rest.clone();
                for ancestor in self.ancestors(id) {
                    if missing.is_empty() {
                        break;
                    }
                    missing.remove(&ancestor.item);
                }
                missing.is_empty()
            })
            .map(|id| self.nodes[id].count)
            .sum();

        Ok(support)
    }
}
