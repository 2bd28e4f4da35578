//! Defines the split criteria and the exhaustive split search.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fmt;

use crate::sample::{Dataset, FeatureSpec, Label, Value};
use super::split_rule::{LR, SplitRule};


/// Splitting criteria for growing a decision tree.
/// Both are impurity measures: lower is better, and zero means every
/// member of the subset shares one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// Gini index: one minus the sum of squared label proportions.
    /// Takes value in `[0, 1 - 1/k]` for `k` distinct labels.
    #[default]
    Gini,
    /// Binary entropy function.
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy",
        };
        write!(f, "{name}")
    }
}


/// The winning split of one exhaustive search:
/// the rule, the two index partitions, and the achieved score.
pub(crate) struct BestSplit {
    pub(crate) rule: SplitRule,
    pub(crate) left: Vec<usize>,
    pub(crate) right: Vec<usize>,
    pub(crate) score: f64,
}


impl Criterion {
    /// Returns the impurity of the subset at `indices`.
    /// The empty subset has impurity zero by convention.
    pub fn node_impurity(&self, data: &Dataset, indices: &[usize]) -> f64 {
        let counts = label_counts(data, indices);
        self.impurity_of(&counts, indices.len())
    }


    /// Returns the size-weighted impurity of the two partitions.
    pub fn weighted_impurity(
        &self,
        data: &Dataset,
        left: &[usize],
        right: &[usize],
    ) -> f64
    {
        let total = left.len() + right.len();
        if total == 0 {
            return 0.0;
        }

        let lp = left.len() as f64 / total as f64;
        let rp = right.len() as f64 / total as f64;

        lp * self.node_impurity(data, left)
            + rp * self.node_impurity(data, right)
    }


    /// Returns the best splitting rule for the subset at `indices`,
    /// searching the features of `pool` exhaustively.
    ///
    /// Candidate test values are exactly the values observed for each
    /// feature within the subset, no binning. Enumeration order is
    /// fixed: features in declared order, then values in subset row
    /// order. Ties keep the first pair encountered, so the search is
    /// sequential on purpose.
    ///
    /// Returns `None` when there is no candidate at all (an empty
    /// subset or an empty feature pool).
    pub(crate) fn best_split(
        &self,
        data: &Dataset,
        indices: &[usize],
        pool: &[FeatureSpec],
    ) -> Option<BestSplit>
    {
        let mut best: Option<BestSplit> = None;

        for spec in pool {
            for value in observed_values(data, indices, spec.name()) {
                let rule = SplitRule::from_observed(spec.name(), &value);

                let mut left = Vec::new();
                let mut right = Vec::new();
                for &i in indices {
                    match rule.split_row(data, i) {
                        LR::Left => { left.push(i); },
                        LR::Right => { right.push(i); },
                    }
                }

                let score = self.weighted_impurity(data, &left, &right);
                if best.as_ref().map_or(true, |b| score < b.score) {
                    best = Some(BestSplit { rule, left, right, score });
                }
            }
        }

        best
    }


    fn impurity_of(&self, counts: &HashMap<&Label, usize>, total: usize)
        -> f64
    {
        match self {
            Self::Gini => gini_impurity(counts, total),
            Self::Entropy => entropic_impurity(counts, total),
        }
    }
}


/// Returns the gini-impurity of the given counts.
#[inline]
fn gini_impurity(counts: &HashMap<&Label, usize>, total: usize) -> f64 {
    if total == 0 || counts.is_empty() {
        return 0.0;
    }

    let correct = counts.values()
        .map(|&c| (c as f64 / total as f64).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// Returns the entropic-impurity of the given counts.
#[inline]
fn entropic_impurity(counts: &HashMap<&Label, usize>, total: usize) -> f64 {
    if total == 0 || counts.is_empty() {
        return 0.0;
    }

    counts.values()
        .map(|&c| {
            let r = c as f64 / total as f64;
            if r <= 0.0 { 0.0 } else { -r * r.ln() }
        })
        .sum::<f64>()
}


fn label_counts<'a>(data: &'a Dataset, indices: &[usize])
    -> HashMap<&'a Label, usize>
{
    let mut counts = HashMap::new();
    for &i in indices {
        *counts.entry(data.target(i)).or_insert(0) += 1;
    }
    counts
}


/// The distinct values the subset takes for `feature`,
/// in subset row order.
fn observed_values(data: &Dataset, indices: &[usize], feature: &str)
    -> Vec<Value>
{
    let mut values = Vec::new();
    for &i in indices {
        let value = data.record(i)
            .get(feature)
            .expect("record violates the dataset schema");
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
    values
}


/// The most frequent label among `votes`, with ties broken by the
/// earliest position in `order`. Votes outside `order` are ignored.
pub(crate) fn majority_vote<'a, V>(votes: V, order: &[Label]) -> Label
    where V: IntoIterator<Item = &'a Label>,
{
    let mut counts: HashMap<&Label, usize> = HashMap::new();
    for label in votes {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut best: Option<(&Label, usize)> = None;
    for label in order {
        let count = counts.get(label).copied().unwrap_or(0);
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }

    best.expect("majority vote over an empty label ordering").0.clone()
}


/// The majority label of the subset at `indices`.
pub(crate) fn majority_label(
    data: &Dataset,
    indices: &[usize],
    order: &[Label],
) -> Label
{
    majority_vote(indices.iter().map(|&i| data.target(i)), order)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Record, Schema};


    fn two_label_data() -> Dataset {
        let schema = Schema::new("approved")
            .categorical("history")
            .numeric("revenue");
        let records = vec![
            Record::new()
                .set("history", "bad").set("revenue", 2000.0)
                .set("approved", "no"),
            Record::new()
                .set("history", "good").set("revenue", 5000.0)
                .set("approved", "yes"),
            Record::new()
                .set("history", "good").set("revenue", 5500.0)
                .set("approved", "yes"),
            Record::new()
                .set("history", "bad").set("revenue", 1800.0)
                .set("approved", "no"),
        ];
        Dataset::from_records(schema, records).unwrap()
    }


    #[test]
    fn impurity_is_zero_iff_at_most_one_label() {
        let data = two_label_data();
        let criterion = Criterion::Gini;

        assert_eq!(criterion.node_impurity(&data, &[]), 0.0);
        assert_eq!(criterion.node_impurity(&data, &[0]), 0.0);
        assert_eq!(criterion.node_impurity(&data, &[0, 3]), 0.0);
        assert!(criterion.node_impurity(&data, &[0, 1]) > 0.0);
    }


    #[test]
    fn gini_of_an_even_binary_subset_is_one_half() {
        let data = two_label_data();
        let gini = Criterion::Gini.node_impurity(&data, &[0, 1, 2, 3]);
        assert!((gini - 0.5).abs() < 1e-12);
    }


    #[test]
    fn best_split_never_worse_than_the_node() {
        let data = two_label_data();
        let criterion = Criterion::Gini;
        let indices = [0, 1, 2, 3];

        let node = criterion.node_impurity(&data, &indices);
        let best = criterion
            .best_split(&data, &indices, data.schema().features())
            .unwrap();
        assert!(best.score <= node);
    }


    #[test]
    fn perfect_split_scores_zero() {
        let data = two_label_data();
        let best = Criterion::Gini
            .best_split(&data, &[0, 1, 2, 3], data.schema().features())
            .unwrap();

        assert_eq!(best.score, 0.0);
        assert_eq!(best.left.len() + best.right.len(), 4);
    }


    #[test]
    fn empty_pool_yields_no_split() {
        let data = two_label_data();
        assert!(Criterion::Gini.best_split(&data, &[0, 1], &[]).is_none());
    }


    #[test]
    fn majority_breaks_ties_by_label_order() {
        let data = two_label_data();
        // Two `no` and two `yes`: `no` appeared first.
        let label = majority_label(&data, &[0, 1, 2, 3], data.labels());
        assert_eq!(label, Label::from("no"));
    }
}
