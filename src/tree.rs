//! The files in `tree/` directory define the CART tree induction
//! algorithm and the fitted decision tree model.

// Provides split rules.
pub(crate) mod split_rule;
// Provides split criteria and the exhaustive split search.
pub(crate) mod criterion;
// Provides the inner node representation of a fitted tree.
pub(crate) mod node;
// Provides the tree growing algorithm.
pub(crate) mod builder;
// Provides the fitted decision tree model.
pub(crate) mod decision_tree;


pub use split_rule::{SplitRule, SplitTest};
pub use criterion::Criterion;
pub use node::{BranchNode, LeafNode, Node};
pub use builder::TreeBuilder;
pub use decision_tree::DecisionTree;
