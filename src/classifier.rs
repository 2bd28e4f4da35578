//! Defines the classifier trait implemented by trees and forests,
//! and the evaluation summary returned by scoring.

use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::sample::{Dataset, Label, Record};


/// A trait that defines the behavior of a fitted classification model.
/// You only need to implement the `predict` and `labels` methods.
pub trait Classifier {
    /// Predicts the label of the given record.
    /// Fails with [`PredictError::MissingFeature`] when a decision
    /// node on the traversal path references a feature absent from
    /// the record.
    fn predict(&self, record: &Record) -> Result<Label, PredictError>;


    /// Returns the label domain observed during fit, in the global
    /// tie-break ordering.
    fn labels(&self) -> &[Label];


    /// Predicts the label of the `row`-th record of `data`.
    fn predict_row(&self, data: &Dataset, row: usize)
        -> Result<Label, PredictError>
    {
        self.predict(data.record(row))
    }


    /// Predicts the labels of every record of `data`, in order.
    fn predict_all(&self, data: &Dataset)
        -> Result<Vec<Label>, PredictError>
    {
        (0..data.len())
            .map(|row| self.predict_row(data, row))
            .collect()
    }


    /// Scores the model on `data`, counting correct predictions.
    ///
    /// A record whose true label was never seen during fit counts as
    /// incorrect and is tallied in
    /// [`n_unknown_label`](Evaluation::n_unknown_label) rather than
    /// aborting the evaluation.
    fn evaluate(&self, data: &Dataset) -> Result<Evaluation, PredictError> {
        let mut evaluation = Evaluation {
            n_sample: data.len(),
            n_correct: 0,
            n_unknown_label: 0,
        };

        for row in 0..data.len() {
            let truth = data.target(row);
            if !self.labels().contains(truth) {
                evaluation.n_unknown_label += 1;
                continue;
            }
            if self.predict_row(data, row)? == *truth {
                evaluation.n_correct += 1;
            }
        }

        Ok(evaluation)
    }


    /// The fraction of records of `data` whose prediction equals the
    /// true target label. Takes value in `[0, 1]`.
    fn score(&self, data: &Dataset) -> Result<f64, PredictError> {
        self.evaluate(data).map(|evaluation| evaluation.accuracy())
    }
}


/// The outcome of scoring a model over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The number of records evaluated.
    pub n_sample: usize,
    /// The number of records predicted correctly.
    pub n_correct: usize,
    /// The number of records whose true label was never seen during
    /// fit. Each contributes zero to correctness.
    pub n_unknown_label: usize,
}


impl Evaluation {
    /// Returns `n_correct / n_sample`, or `0.0` for an empty dataset.
    #[inline]
    pub fn accuracy(&self) -> f64 {
        if self.n_sample == 0 {
            0.0
        } else {
            self.n_correct as f64 / self.n_sample as f64
        }
    }
}
