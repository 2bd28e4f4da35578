//! Bootstrap-aggregated forests of decision trees.
pub(crate) mod sampler;
pub(crate) mod random_forest;

pub use sampler::{bootstrap, feature_subset, BootstrapSample};
pub use random_forest::{
    BaggedTree,
    ForestBuilder,
    RandomForest,
    DEFAULT_SEED,
    DEFAULT_TREE_COUNT,
};
