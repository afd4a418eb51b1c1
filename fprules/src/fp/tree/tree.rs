use std::collections::BTreeMap;

pub type Item = u32;
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Item,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: BTreeMap<Item, NodeId>,
    /// Next node carrying the same item, in occurrence-list order.
    pub next: Option<NodeId>,
}

/// Per-item header entry: aggregate count plus the ends of the occurrence list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub count: usize,
    pub head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
}

/// Prefix-sharing trie over transactions.
///
/// Nodes live in an arena and refer to each other by index. A forest of roots
/// (one per leading item) replaces a sentinel root node. Nodes detached by
/// [`FPTree::remove_item`] stay in the arena unreachable until the tree is
/// cloned, which compacts it.
#[derive(Debug)]
pub struct FPTree {
    pub(crate) min_support: usize,
    pub(crate) nodes: Vec<FPNode>,
    pub(crate) roots: BTreeMap<Item, NodeId>,
    pub(crate) header: BTreeMap<Item, HeaderEntry>,
}

impl FPNode {
    pub fn new(item: Item, count: usize, parent: Option<NodeId>) -> Self {
        Self {
            item,
            count,
            parent,
            children: BTreeMap::new(),
            next: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl FPTree {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            nodes: Vec::new(),
            roots: BTreeMap::new(),
            header: BTreeMap::new(),
        }
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// A single root without children.
    pub fn contains_one_item(&self) -> bool {
        self.roots.len() == 1
            && self
                .roots
                .values()
                .all(|&root| self.nodes[root].is_leaf())
    }

    pub fn header(&self, item: Item) -> Option<&HeaderEntry> {
        self.header.get(&item)
    }

    /// Items in the header, ascending.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.header.keys().copied()
    }

    pub fn roots(&self) -> impl Iterator<Item = &FPNode> + '_ {
        self.roots.values().map(move |&id| &self.nodes[id])
    }

    pub fn node(&self, id: NodeId) -> &FPNode {
        &self.nodes[id]
    }

    pub(crate) fn occurrence_ids(&self, item: Item) -> OccurrenceIds<'_> {
        OccurrenceIds {
            nodes: &self.nodes,
            current: self.header.get(&item).and_then(|entry| entry.head),
        }
    }

    /// Every node carrying `item`, following the occurrence list.
    pub fn occurrences(&self, item: Item) -> impl Iterator<Item = &FPNode> + '_ {
        self.occurrence_ids(item).map(move |id| &self.nodes[id])
    }

    /// Ancestors of `id`, nearest first. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &FPNode> + '_ {
        std::iter::successors(self.nodes[id].parent, move |&parent| self.nodes[parent].parent)
            .map(move |parent| &self.nodes[parent])
    }

    /// Number of nodes reachable from the roots.
    pub fn len(&self) -> usize {
        self.header
            .keys()
            .map(|&item| self.occurrence_ids(item).count())
            .sum()
    }
}

pub(crate) struct OccurrenceIds<'a> {
    nodes: &'a [FPNode],
    current: Option<NodeId>,
}

impl Iterator for OccurrenceIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.nodes[id].next;
        Some(id)
    }
}

impl Clone for FPTree {
    /// Deep copy into a fresh arena holding only reachable nodes.
    ///
    /// Nodes are copied in depth-first pre-order (ascending item at every
    /// level) and relinked into the occurrence lists in that same order.
    fn clone(&self) -> Self {
        let mut tree = FPTree {
            min_support: self.min_support,
            nodes: Vec::with_capacity(self.nodes.len()),
            roots: BTreeMap::new(),
            header: self
                .header
                .iter()
                .map(|(&item, entry)| {
                    let entry = HeaderEntry {
                        count: entry.count,
                        ..HeaderEntry::default()
                    };
                    (item, entry)
                })
                .collect(),
        };

        let mut stack: Vec<(NodeId, Option<NodeId>)> =
            self.roots.values().rev().map(|&id| (id, None)).collect();

        while let Some((source_id, parent)) = stack.pop() {
            let source = &self.nodes[source_id];
            let id = tree.nodes.len();
            tree.nodes.push(FPNode::new(source.item, source.count, parent));

            match parent {
                Some(parent) => {
                    tree.nodes[parent].children.insert(source.item, id);
                }
                None => {
                    tree.roots.insert(source.item, id);
                }
            }
            tree.insert_header_link(id);

            stack.extend(source.children.values().rev().map(|&child| (child, Some(id))));
        }

        tree
    }
}
