//! This file defines split rules for decision trees.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::error::PredictError;
use crate::sample::{Record, Value};


/// The output of the function `split` of [`SplitRule`].
/// `Left` is the "match" branch: the record satisfied the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


/// The kind-dependent test held by a decision node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitTest {
    /// Numeric test: `value <= threshold` routes left.
    AtMost(f64),
    /// Categorical test: `value == category` routes left.
    Is(String),
}


/// A splitting rule: a feature name paired with a [`SplitTest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    feature: String,
    test: SplitTest,
}


impl SplitRule {
    /// Build the rule whose candidate test value is `value`,
    /// as observed in the training subset.
    #[inline]
    pub(crate) fn from_observed(feature: &str, value: &Value) -> Self {
        let test = match value {
            Value::Numeric(x) => SplitTest::AtMost(*x),
            Value::Categorical(s) => SplitTest::Is(s.clone()),
        };
        Self { feature: feature.to_string(), test }
    }


    /// Returns the feature name this rule tests.
    #[inline]
    pub fn feature(&self) -> &str {
        &self.feature
    }


    /// Returns the test.
    #[inline]
    pub fn test(&self) -> &SplitTest {
        &self.test
    }


    /// Defines the splitting of a prediction-time record.
    #[inline]
    pub(crate) fn split(&self, record: &Record) -> Result<LR, PredictError> {
        let value = record.get(&self.feature)
            .ok_or_else(|| PredictError::MissingFeature {
                feature: self.feature.clone(),
            })?;
        Ok(self.apply(value))
    }


    /// Defines the splitting of a training row. The dataset schema
    /// guarantees the feature is present.
    #[inline]
    pub(crate) fn split_row(
        &self,
        data: &crate::sample::Dataset,
        row: usize,
    ) -> LR
    {
        let value = data.record(row)
            .get(&self.feature)
            .expect("record violates the dataset schema");
        self.apply(value)
    }


    #[inline]
    fn apply(&self, value: &Value) -> LR {
        match (&self.test, value) {
            (SplitTest::AtMost(threshold), Value::Numeric(x)) => {
                if x <= threshold { LR::Left } else { LR::Right }
            },
            (SplitTest::Is(category), Value::Categorical(s)) => {
                if s == category { LR::Left } else { LR::Right }
            },
            // A value of the wrong kind never matches the test.
            _ => LR::Right,
        }
    }
}


impl fmt::Display for SplitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.test {
            SplitTest::AtMost(threshold) => {
                write!(f, "{} <= {threshold}", self.feature)
            },
            SplitTest::Is(category) => {
                write!(f, "{} == {category}", self.feature)
            },
        }
    }
}
