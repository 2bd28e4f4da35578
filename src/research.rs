//! Evaluation helpers for experiments.
pub(crate) mod cross_validation;

pub use cross_validation::CrossValidation;
