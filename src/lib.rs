#![warn(missing_docs)]

//!
//! A crate that provides CART decision trees and bagged random
//! forests for binary and multi-class classification.
//!
//! Two classifiers are provided.
//!
//! - Decision tree
//!     [`TreeBuilder`] grows a tree by recursive partitioning,
//!     searching every (feature, observed value) pair for the split
//!     that minimizes the chosen impurity criterion.
//!     No binning, no sampling: the search is exhaustive and the
//!     resulting tree is a deterministic function of the dataset.
//!
//! - Random forest
//!     [`ForestBuilder`] bags decision trees: each one is grown on a
//!     bootstrap resample of the dataset, optionally over a random
//!     feature subset, and prediction takes a majority vote.
//!     The whole ensemble is reproducible from a single seed.
//!
//! Datasets are assembled from plain records with
//! [`Dataset::from_records`], or from a `polars` dataframe with
//! [`Dataset::from_dataframe`].

pub mod sample;
pub mod classifier;
pub mod error;
pub mod tree;
pub mod forest;
pub mod research;

pub mod prelude;


pub use sample::{
    Dataset,
    FeatureKind,
    FeatureSpec,
    Label,
    Record,
    Schema,
    Value,
};

pub use classifier::{Classifier, Evaluation};

pub use tree::{Criterion, DecisionTree, Node, SplitRule, SplitTest, TreeBuilder};

pub use forest::{BaggedTree, ForestBuilder, RandomForest};

pub use research::CrossValidation;
