use crate::error::MiningError;
use crate::fp::{FPTree, Itemset, ItemsetDisplay, Rule};
use rayon::prelude::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemsetSummary {
    pub itemset: Itemset,
    pub support: usize,
    pub support_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleSummary {
    pub rule: Rule,
    pub support: usize,
    pub support_ratio: f64,
    pub confidence: f64,
}

fn support_ratio(support: usize, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        0.0
    } else {
        support as f64 / num_transactions as f64
    }
}

/// Itemsets with their supports, least supported first.
///
/// Support queries walk the tree and dominate the cost, so they run on the
/// rayon pool. Equal supports keep mining order.
pub fn summarize_itemsets(
    itemsets: &[Itemset],
    tree: &FPTree,
    num_transactions: usize,
) -> Result<Vec<ItemsetSummary>, MiningError> {
    let mut summaries = itemsets
        .par_iter()
        .map(|itemset| {
            let support = tree.get_support(itemset)?;
            Ok(ItemsetSummary {
                itemset: itemset.clone(),
                support,
                support_ratio: support_ratio(support, num_transactions),
            })
        })
        .collect::<Result<Vec<_>, MiningError>>()?;

    summaries.sort_by_key(|summary| summary.support);
    Ok(summaries)
}

/// Rules with support and confidence, in the given order.
pub fn summarize_rules(
    rules: &[Rule],
    tree: &FPTree,
    num_transactions: usize,
) -> Result<Vec<RuleSummary>, MiningError> {
    rules
        .par_iter()
        .map(|rule| {
            let support = rule.support(tree)?;
            Ok(RuleSummary {
                rule: rule.clone(),
                support,
                support_ratio: support_ratio(support, num_transactions),
                confidence: rule.confidence(tree)?,
            })
        })
        .collect()
}

impl fmt::Display for ItemsetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "support: {:.4} {}", self.support_ratio, ItemsetDisplay(&self.itemset))
    }
}

impl fmt::Display for RuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "support: {:.4}, confidence: {:.4} {}",
            self.support_ratio, self.confidence, self.rule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::mine_frequent_itemsets;

    fn example_tree() -> FPTree {
        FPTree::build(2, &[vec![1, 2, 3], vec![1, 3], vec![1, 4]])
    }

    #[test]
    fn test_itemsets_sorted_by_support() {
        let tree = example_tree();
        let itemsets = mine_frequent_itemsets(tree.clone()).unwrap();
        let summaries = summarize_itemsets(&itemsets, &tree, 3).unwrap();

        let supports: Vec<usize> = summaries.iter().map(|s| s.support).collect();
        assert_eq!(supports, vec![2, 2, 3]);
        assert_eq!(summaries[2].itemset, Itemset::from([1]));
        assert_eq!(summaries[2].to_string(), "support: 1.0000 {1}");
    }

    #[test]
    fn test_rule_summary_display() {
        let tree = example_tree();
        let rules = vec![Rule::new([1], [3])];
        let summaries = summarize_rules(&rules, &tree, 3).unwrap();

        assert_eq!(summaries[0].support, 2);
        assert!((summaries[0].confidence - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            summaries[0].to_string(),
            "support: 0.6667, confidence: 0.6667 {1} -> {3}"
        );
    }

    #[test]
    fn test_unknown_item_propagates() {
        let tree = example_tree();
        let itemsets = vec![Itemset::from([1, 4])];
        assert_eq!(
            summarize_itemsets(&itemsets, &tree, 3),
            Err(MiningError::UnknownItem(4))
        );
    }
}
