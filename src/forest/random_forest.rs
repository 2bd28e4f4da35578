//! Defines the random forest and its builder.

use rand::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::classifier::Classifier;
use crate::error::{FitError, ModelIoError, PredictError};
use crate::sample::{Dataset, FeatureSpec, Label, Record};
use crate::tree::criterion::majority_vote;
use crate::tree::{Criterion, DecisionTree, TreeBuilder};
use super::sampler::{bootstrap, feature_subset};


/// Default number of trees in a forest.
pub const DEFAULT_TREE_COUNT: usize = 10;

/// Default master seed of the forest builder.
pub const DEFAULT_SEED: u64 = 1234;


/// A builder that fits a [`RandomForest`] by bagging:
/// each tree is grown on an independent bootstrap resample of the
/// dataset, optionally over a random feature subset.
///
/// The entire procedure is a deterministic function of the dataset
/// and the master seed. Per-tree seeds are drawn up front from the
/// master generator, so trees can be grown in parallel without
/// touching the determinism contract.
///
/// # Example
/// ```no_run
/// use minicart::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let dataset: Dataset = unimplemented!();
/// let forest = ForestBuilder::new(&dataset)
///     .n_trees(50)
///     .max_depth(8)
///     .seed(42)
///     .fit()?;
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct ForestBuilder<'a> {
    data: &'a Dataset,
    n_trees: usize,
    criterion: Criterion,
    max_depth: Option<usize>,
    feature_subset_size: Option<usize>,
    seed: u64,
    resample: bool,
}


impl<'a> ForestBuilder<'a> {
    /// Construct a new instance of [`ForestBuilder`]
    /// with the default configuration.
    pub fn new(data: &'a Dataset) -> Self {
        Self {
            data,
            n_trees: DEFAULT_TREE_COUNT,
            criterion: Criterion::default(),
            max_depth: None,
            feature_subset_size: None,
            seed: DEFAULT_SEED,
            resample: true,
        }
    }


    /// Set the number of trees.
    /// Default value is [`DEFAULT_TREE_COUNT`].
    #[inline]
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }


    /// Set the node splitting criterion shared by every tree.
    /// Default value is [`Criterion::Gini`].
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Bound the depth of every tree. Unset by default (unbounded);
    /// an explicit zero is rejected at fit time.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Grow each tree over `k` features drawn without replacement.
    /// Unset by default: every tree sees the full feature set.
    #[inline]
    pub fn feature_subset_size(mut self, k: usize) -> Self {
        self.feature_subset_size = Some(k);
        self
    }


    /// Set the master seed.
    /// Default value is [`DEFAULT_SEED`].
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Toggle bootstrap resampling. Enabled by default; when
    /// disabled every tree trains on the full dataset, which
    /// reduces a single-tree forest to a plain decision tree.
    #[inline]
    pub fn bootstrap(mut self, resample: bool) -> Self {
        self.resample = resample;
        self
    }


    /// Fit the forest. This method consumes `self`.
    #[instrument(skip_all)]
    pub fn fit(self) -> Result<RandomForest, FitError> {
        if self.data.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        if self.n_trees == 0 {
            return Err(FitError::InvalidTreeCount { n_trees: 0 });
        }
        if self.max_depth == Some(0) {
            return Err(FitError::InvalidMaxDepth { max_depth: 0 });
        }

        let n_features = self.data.schema().features().len();
        if let Some(k) = self.feature_subset_size {
            if k == 0 || k > n_features {
                return Err(FitError::InvalidFeatureSubset {
                    subset_size: k,
                    n_features,
                });
            }
        }

        info!(
            n_trees = self.n_trees,
            seed = self.seed,
            criterion = %self.criterion,
            data = %self.data,
            "fitting random forest",
        );

        // Draw every per-tree seed before any tree is grown.
        // The parallel map below then owns its seed, and the
        // collected order matches the draw order.
        let mut master = StdRng::seed_from_u64(self.seed);
        let seeds = (0..self.n_trees)
            .map(|_| master.gen::<u64>())
            .collect::<Vec<_>>();

        let trees = seeds.into_par_iter()
            .map(|seed| self.grow_tree(seed))
            .collect::<Vec<_>>();

        debug!(
            branch_counts = ?trees.iter()
                .map(|t| t.tree().branch_count())
                .collect::<Vec<_>>(),
            "random forest fitted",
        );

        Ok(RandomForest {
            trees,
            labels: self.data.labels().to_vec(),
        })
    }


    fn grow_tree(&self, seed: u64) -> BaggedTree {
        let mut rng = StdRng::seed_from_u64(seed);

        let features = self.feature_subset_size.map(|k| {
            feature_subset(self.data.schema().features(), k, &mut rng)
        });

        let sample;
        let train = if self.resample {
            sample = bootstrap(self.data, self.data.len(), &mut rng)
                .into_data();
            &sample
        } else {
            self.data
        };

        let mut builder = TreeBuilder::new(train)
            .criterion(self.criterion);
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        if let Some(pool) = &features {
            builder = builder.feature_pool(pool.clone());
        }

        let tree = builder.fit()
            .expect("tree fit cannot fail on a pre-validated sample");

        BaggedTree { tree, features }
    }
}


/// One member of a [`RandomForest`]: the fitted tree together with
/// the feature subset it was grown over, if subsetting was on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggedTree {
    tree: DecisionTree,
    features: Option<Vec<FeatureSpec>>,
}


impl BaggedTree {
    /// Returns the fitted tree.
    #[inline]
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }


    /// Returns the feature subset this tree was grown over,
    /// or `None` when it saw the full feature set.
    #[inline]
    pub fn features(&self) -> Option<&[FeatureSpec]> {
        self.features.as_deref()
    }
}


/// A fitted forest. Prediction is a majority vote over the member
/// trees, with ties broken by the label ordering of the training
/// dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<BaggedTree>,
    labels: Vec<Label>,
}


impl RandomForest {
    /// Returns the number of member trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }


    /// Returns the member trees in training order.
    #[inline]
    pub fn trees(&self) -> &[BaggedTree] {
        &self.trees[..]
    }


    /// Returns the branch count of each member tree,
    /// in training order.
    pub fn branch_counts(&self) -> Vec<usize> {
        self.trees.iter()
            .map(|member| member.tree.branch_count())
            .collect()
    }


    /// Write the model to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<(), ModelIoError>
        where P: AsRef<Path>,
    {
        let file = File::create(&path)
            .map_err(|source| ModelIoError::Write {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|source| ModelIoError::Serialize { source })
    }


    /// Read a model back from a JSON file written by
    /// [`to_json_file`](RandomForest::to_json_file).
    pub fn from_json_file<P>(path: P) -> Result<Self, ModelIoError>
        where P: AsRef<Path>,
    {
        let file = File::open(&path)
            .map_err(|source| ModelIoError::Read {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ModelIoError::Deserialize { source })
    }
}


impl Classifier for RandomForest {
    fn predict(&self, record: &Record) -> Result<Label, PredictError> {
        let votes = self.trees.iter()
            .map(|member| member.tree.predict(record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(majority_vote(votes.iter(), &self.labels))
    }


    fn labels(&self) -> &[Label] {
        &self.labels[..]
    }
}
