//! Defines the cell values, feature kinds, and class labels
//! shared by every record of a dataset.

use serde::{Deserialize, Serialize};

use std::fmt;


/// The kind of a feature, declared by the caller.
/// The core never infers kinds from the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// An ordered scalar, compared by threshold.
    Numeric,
    /// A discrete value, compared by equality.
    Categorical,
}


/// A single cell of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An ordered scalar.
    Numeric(f64),
    /// A discrete category.
    Categorical(String),
}


impl Value {
    /// Returns the kind of `self`.
    #[inline]
    pub fn kind(&self) -> FeatureKind {
        match self {
            Value::Numeric(_) => FeatureKind::Numeric,
            Value::Categorical(_) => FeatureKind::Categorical,
        }
    }


    /// Returns the inner scalar for a numeric value.
    #[inline]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(x) => Some(*x),
            Value::Categorical(_) => None,
        }
    }


    /// Returns the inner category for a categorical value.
    #[inline]
    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            Value::Numeric(_) => None,
            Value::Categorical(s) => Some(s),
        }
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Numeric(x)
    }
}


impl From<i64> for Value {
    #[inline]
    fn from(x: i64) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<i32> for Value {
    #[inline]
    fn from(x: i32) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Categorical(s.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Categorical(s)
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(x) => write!(f, "{x}"),
            Value::Categorical(s) => write!(f, "{s}"),
        }
    }
}


/// A class label from the target domain.
/// The set of labels observed during training, in order of first
/// appearance, doubles as the global tie-break ordering for
/// majority decisions.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Label(String);


impl Label {
    /// Returns the label text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}


impl From<&str> for Label {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}


impl From<String> for Label {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
