//! Exports the standard classifiers and traits.
//!
pub use crate::sample::{
    // Data assembly
    Dataset,
    Record,
    Schema,

    // Cell values and labels
    FeatureKind,
    FeatureSpec,
    Label,
    Value,
};


pub use crate::tree::{
    // Decision tree
    TreeBuilder,
    DecisionTree,
    Criterion,

    // Fitted structure
    Node,
    SplitRule,
    SplitTest,
};


pub use crate::forest::{
    // Random forest
    ForestBuilder,
    RandomForest,
    BaggedTree,
};


pub use crate::classifier::{
    Classifier,
    Evaluation,
};


pub use crate::error::{
    FitError,
    ModelIoError,
    PredictError,
    SchemaError,
};
