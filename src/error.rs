//! Error types returned by the crate.
//!
//! Every failure here is a deterministic function of the input:
//! the core performs no I/O besides the explicit model persistence
//! helpers, so there is no partial-failure or retry state to manage.

use std::path::PathBuf;


/// Errors raised while assembling a [`Dataset`](crate::Dataset)
/// from records or a dataframe.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A record lacks the target field.
    #[error("record {row} is missing the target field")]
    MissingTarget {
        /// The zero-based index of the offending record.
        row: usize,
    },

    /// A record carries a numeric value in the target field.
    /// The target domain is a finite set of labels.
    #[error("record {row} has a non-categorical target value")]
    NonCategoricalTarget {
        /// The zero-based index of the offending record.
        row: usize,
    },

    /// A record lacks a feature declared by the schema.
    #[error("record {row} is missing feature `{feature}`")]
    MissingFeature {
        /// The zero-based index of the offending record.
        row: usize,
        /// The name of the missing feature.
        feature: String,
    },

    /// A record's value disagrees with the declared feature kind.
    #[error("record {row} has the wrong kind of value for feature `{feature}`")]
    KindMismatch {
        /// The zero-based index of the offending record.
        row: usize,
        /// The name of the mismatched feature.
        feature: String,
    },

    /// A numeric cell is NaN or infinite.
    #[error("non-finite value at record {row}, feature `{feature}`")]
    NonFiniteValue {
        /// The zero-based index of the offending record.
        row: usize,
        /// The name of the offending feature.
        feature: String,
    },

    /// A dataframe cell is null.
    #[error("null value at row {row}, column `{feature}`")]
    NullValue {
        /// The zero-based index of the offending row.
        row: usize,
        /// The name of the offending column.
        feature: String,
    },

    /// A dataframe column has a type the core cannot classify
    /// as categorical or numeric.
    #[error("column `{column}` has unsupported dtype {dtype}")]
    UnsupportedColumn {
        /// The name of the offending column.
        column: String,
        /// The polars dtype of the column.
        dtype: String,
    },

    /// The target series length disagrees with the dataframe height.
    #[error("target has {got} entries, expected {expected}")]
    TargetLengthMismatch {
        /// The dataframe height.
        expected: usize,
        /// The target series length.
        got: usize,
    },
}


/// Errors raised by `fit` on a tree or forest builder.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    /// Returned when the training dataset has zero records.
    #[error("training dataset has zero records")]
    EmptyDataset,

    /// Returned when `max_depth` is explicitly set to zero.
    #[error("max_depth must be at least 1, got {max_depth}")]
    InvalidMaxDepth {
        /// The invalid max_depth value provided.
        max_depth: usize,
    },

    /// Returned when `n_trees` is zero.
    #[error("n_trees must be at least 1, got {n_trees}")]
    InvalidTreeCount {
        /// The invalid n_trees value provided.
        n_trees: usize,
    },

    /// Returned when `feature_subset_size` is zero or exceeds
    /// the number of available features.
    #[error("feature_subset_size is {subset_size}, but must be in [1, {n_features}]")]
    InvalidFeatureSubset {
        /// The requested subset size.
        subset_size: usize,
        /// The number of features in the dataset.
        n_features: usize,
    },
}


/// Errors raised during prediction traversal.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// A decision node on the traversal path references a feature
    /// absent from the input record.
    #[error("record is missing feature `{feature}` required by a decision node")]
    MissingFeature {
        /// The name of the missing feature.
        feature: String,
    },
}


/// Errors raised while reading or writing a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelIoError {
    /// Returned when writing the model file fails.
    #[error("failed to write model to {path}")]
    Write {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when reading the model file fails.
    #[error("failed to read model from {path}")]
    Read {
        /// Path to the model file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when model serialization fails.
    #[error("failed to serialize model")]
    Serialize {
        /// The underlying serde_json error.
        source: serde_json::Error,
    },

    /// Returned when model deserialization fails.
    #[error("failed to deserialize model")]
    Deserialize {
        /// The underlying serde_json error.
        source: serde_json::Error,
    },
}
