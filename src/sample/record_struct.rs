//! Defines the record struct, one row of a dataset.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use super::value::Value;


/// A single tabular record: a mapping from feature name to [`Value`].
///
/// # Example
/// ```
/// use minicart::{Record, Value};
///
/// let record = Record::new()
///     .set("revenue", 2000.0)
///     .set("history", "bad");
/// assert_eq!(record.get("history"), Some(&Value::from("bad")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, Value>,
}


impl Record {
    /// Construct an empty record.
    #[inline]
    pub fn new() -> Self {
        Self { fields: HashMap::new() }
    }


    /// Set a field, consuming and returning `self`.
    #[inline]
    pub fn set<S, V>(mut self, name: S, value: V) -> Self
        where S: Into<String>,
              V: Into<Value>,
    {
        self.fields.insert(name.into(), value.into());
        self
    }


    /// Insert a field in place.
    #[inline]
    pub fn insert<S, V>(&mut self, name: S, value: V)
        where S: Into<String>,
              V: Into<Value>,
    {
        self.fields.insert(name.into(), value.into());
    }


    /// Returns the value of the field named `name`, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }


    /// Returns `true` if the record has a field named `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }


    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }


    /// Returns `true` if the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}


impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}
