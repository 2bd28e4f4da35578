//! Defines the tree growing algorithm.

use tracing::debug;

use crate::error::FitError;
use crate::sample::{Dataset, FeatureSpec};
use super::criterion::{majority_label, Criterion};
use super::decision_tree::DecisionTree;
use super::node::Node;


/// A builder that grows a [`DecisionTree`] from a dataset
/// by recursive partitioning.
///
/// # Example
/// ```no_run
/// use minicart::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let dataset: Dataset = unimplemented!();
/// let tree = TreeBuilder::new(&dataset)
///     .criterion(Criterion::Gini)
///     .max_depth(5)
///     .fit()?;
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct TreeBuilder<'a> {
    data: &'a Dataset,
    criterion: Criterion,
    max_depth: Option<usize>,
    feature_pool: Option<Vec<FeatureSpec>>,
}


impl<'a> TreeBuilder<'a> {
    /// Construct a new instance of [`TreeBuilder`].
    /// By default the criterion is the Gini index and the depth
    /// is unbounded.
    pub fn new(data: &'a Dataset) -> Self {
        Self {
            data,
            criterion: Criterion::default(),
            max_depth: None,
            feature_pool: None,
        }
    }


    /// Set the node splitting criterion.
    /// Default value is [`Criterion::Gini`].
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Bound the depth of the tree. Unset by default (unbounded);
    /// an explicit zero is rejected at fit time.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Restrict the candidate features of the split search.
    /// Used by the forest when feature subsetting is configured;
    /// the pool is expected in declared order.
    #[inline]
    pub(crate) fn feature_pool(mut self, pool: Vec<FeatureSpec>) -> Self {
        self.feature_pool = Some(pool);
        self
    }


    /// Grow the tree. This method consumes `self`.
    pub fn fit(self) -> Result<DecisionTree, FitError> {
        if self.data.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        if self.max_depth == Some(0) {
            return Err(FitError::InvalidMaxDepth { max_depth: 0 });
        }

        let pool = match &self.feature_pool {
            Some(pool) => &pool[..],
            None => self.data.schema().features(),
        };

        let indices = (0..self.data.len()).collect::<Vec<_>>();
        let root = self.grow(pool, indices, 0);

        debug!(
            branches = root.branch_count(),
            criterion = %self.criterion,
            "decision tree grown",
        );

        Ok(DecisionTree::from_parts(root, self.data.labels().to_vec()))
    }


    /// Recursive construction. The stopping rules apply in a fixed
    /// precedence: PURE, then MAX_DEPTH, then DEGENERATE_SPLIT; only
    /// a strict, non-empty two-way partition recurses, which bounds
    /// the recursion by the shrinking subset size.
    fn grow(
        &self,
        pool: &[FeatureSpec],
        indices: Vec<usize>,
        depth: usize,
    ) -> Node
    {
        // The subset is non-empty: `fit` checks the root, and a
        // branch never recurses into an empty partition.
        let first = self.data.target(indices[0]);
        if indices.iter().all(|&i| self.data.target(i) == first) {
            return Node::leaf(first.clone());
        }

        let majority = || {
            majority_label(self.data, &indices, self.data.labels())
        };

        if let Some(max_depth) = self.max_depth {
            if depth >= max_depth {
                return Node::leaf(majority());
            }
        }

        let split = match self.criterion.best_split(self.data, &indices, pool)
        {
            Some(split)
                if !split.left.is_empty() && !split.right.is_empty() =>
            {
                split
            },
            // No candidate pair strictly partitions the subset.
            _ => return Node::leaf(majority()),
        };

        let left = self.grow(pool, split.left, depth + 1);
        let right = self.grow(pool, split.right, depth + 1);

        Node::branch(split.rule, left, right)
    }
}
