use super::mining::Itemset;
use super::tree::{FPTree, Item};
use crate::error::MiningError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
}

impl Rule {
    pub fn new(antecedent: impl IntoIterator<Item = Item>, consequent: impl IntoIterator<Item = Item>) -> Self {
        Self {
            antecedent: antecedent.into_iter().collect(),
            consequent: consequent.into_iter().collect(),
        }
    }

    /// Support of antecedent and consequent together.
    pub fn support(&self, tree: &FPTree) -> Result<usize, MiningError> {
        tree.get_support(self.antecedent.union(&self.consequent))
    }

    pub fn confidence(&self, tree: &FPTree) -> Result<f64, MiningError> {
        confidence(&self.antecedent, &self.consequent, tree)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            ItemsetDisplay(&self.antecedent),
            ItemsetDisplay(&self.consequent)
        )
    }
}

/// Renders an itemset as `{1, 3}`.
pub struct ItemsetDisplay<'a>(pub &'a Itemset);

impl fmt::Display for ItemsetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

/// support(A ∪ B) / support(A), or 0 when A never occurs.
pub fn confidence(antecedent: &Itemset, consequent: &Itemset, tree: &FPTree) -> Result<f64, MiningError> {
    let joint = tree.get_support(antecedent.union(consequent))?;
    let base = tree.get_support(antecedent)?;
    Ok(ratio(joint, base))
}

fn ratio(joint: usize, base: usize) -> f64 {
    if base == 0 { 0.0 } else { joint as f64 / base as f64 }
}

enum Task {
    Expand(Vec<Item>),
    Emit(Rule),
}

/// Rule miner over one tree with a fixed confidence threshold.
///
/// For every item `i` of an itemset, `rest -> {i}` is accepted when it meets
/// the threshold and `rest` has at least two items, and `rest` is then mined
/// in turn. `{i} -> rest` is accepted on the threshold alone and never
/// expanded further.
pub struct RuleMiner<'t> {
    tree: &'t FPTree,
    min_confidence: f64,
    supports: HashMap<Vec<Item>, usize>,
    expanded: HashSet<Vec<Item>>,
}

impl<'t> RuleMiner<'t> {
    pub fn new(tree: &'t FPTree, min_confidence: f64) -> Self {
        Self {
            tree,
            min_confidence,
            supports: HashMap::new(),
            expanded: HashSet::new(),
        }
    }

    /// Rules derived from `itemset`, in discovery order.
    ///
    /// An antecedent this miner already expanded, here or in an earlier call,
    /// is not expanded again. Its rules were emitted the first time.
    /// Itemsets with fewer than two items have no rules.
    pub fn mine(&mut self, itemset: &[Item]) -> Result<Vec<Rule>, MiningError> {
        let mut rules = Vec::new();
        if itemset.len() < 2 {
            return Ok(rules);
        }
        let mut stack = vec![Task::Expand(itemset.to_vec())];

        while let Some(task) = stack.pop() {
            let items = match task {
                Task::Emit(rule) => {
                    rules.push(rule);
                    continue;
                }
                Task::Expand(items) => items,
            };

            let mut key = items.clone();
            key.sort_unstable();
            if !self.expanded.insert(key) {
                continue;
            }

            let mut pending = Vec::new();
            for (i, &item) in items.iter().enumerate() {
                let rest: Vec<Item> = items
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &other)| other)
                    .collect();
                let single = [item];

                if self.confidence(&rest, &single)? >= self.min_confidence && rest.len() >= 2 {
                    pending.push(Task::Emit(Rule::new(rest.iter().copied(), single)));
                    pending.push(Task::Expand(rest.clone()));
                }
                if self.confidence(&single, &rest)? >= self.min_confidence {
                    pending.push(Task::Emit(Rule::new(single, rest)));
                }
            }
            stack.extend(pending.into_iter().rev());
        }

        Ok(rules)
    }

    fn confidence(&mut self, antecedent: &[Item], consequent: &[Item]) -> Result<f64, MiningError> {
        let joint: Vec<Item> = antecedent.iter().chain(consequent).copied().collect();
        let joint = self.support(joint)?;
        let base = self.support(antecedent.to_vec())?;
        Ok(ratio(joint, base))
    }

    fn support(&mut self, mut itemset: Vec<Item>) -> Result<usize, MiningError> {
        itemset.sort_unstable();
        itemset.dedup();
        if let Some(&support) = self.supports.get(&itemset) {
            return Ok(support);
        }
        let support = self.tree.get_support(&itemset)?;
        self.supports.insert(itemset, support);
        Ok(support)
    }
}

/// Rules of a single itemset against `tree`.
pub fn mine_rules(itemset: &[Item], tree: &FPTree, min_confidence: f64) -> Result<Vec<Rule>, MiningError> {
    RuleMiner::new(tree, min_confidence).mine(itemset)
}

/// Deduplicated rules over every itemset with at least two items.
///
/// The first occurrence of a rule fixes its position in the output.
pub fn find_association_rules(
    itemsets: &[Itemset],
    tree: &FPTree,
    min_confidence: f64,
) -> Result<Vec<Rule>, MiningError> {
    let mut miner = RuleMiner::new(tree, min_confidence);
    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for itemset in itemsets.iter().filter(|itemset| itemset.len() > 1) {
        let items: Vec<Item> = itemset.iter().copied().collect();
        for rule in miner.mine(&items)? {
            if seen.insert(rule.clone()) {
                rules.push(rule);
            }
        }
    }

    debug!(rules = rules.len(), "mined association rules");
    Ok(rules)
}
