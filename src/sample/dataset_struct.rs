//! Defines the schema and dataset structs.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::error::SchemaError;
use super::record_struct::Record;
use super::value::{FeatureKind, Label, Value};


/// A feature declaration: a name paired with its [`FeatureKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    name: String,
    kind: FeatureKind,
}


impl FeatureSpec {
    /// Returns the feature name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the declared kind.
    #[inline]
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }
}


/// The schema shared by every record of a dataset:
/// the declared features, in order, plus the target field name.
///
/// Declaration order matters. The split search enumerates features
/// in this order, so it is part of the deterministic contract.
///
/// # Example
/// ```
/// use minicart::Schema;
///
/// let schema = Schema::new("approved")
///     .categorical("history")
///     .numeric("revenue");
/// assert_eq!(schema.target(), "approved");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    features: Vec<FeatureSpec>,
    target: String,
}


impl Schema {
    /// Construct a schema with the given target field name
    /// and no features.
    #[inline]
    pub fn new<S: Into<String>>(target: S) -> Self {
        Self { features: Vec::new(), target: target.into() }
    }


    /// Declare a numeric feature, consuming and returning `self`.
    #[inline]
    pub fn numeric<S: Into<String>>(mut self, name: S) -> Self {
        self.features.push(
            FeatureSpec { name: name.into(), kind: FeatureKind::Numeric }
        );
        self
    }


    /// Declare a categorical feature, consuming and returning `self`.
    #[inline]
    pub fn categorical<S: Into<String>>(mut self, name: S) -> Self {
        self.features.push(
            FeatureSpec { name: name.into(), kind: FeatureKind::Categorical }
        );
        self
    }


    /// Returns the declared features in declaration order.
    #[inline]
    pub fn features(&self) -> &[FeatureSpec] {
        &self.features[..]
    }


    /// Returns the target field name.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }


    /// Returns the declared kind of the feature named `name`.
    #[inline]
    pub fn kind_of(&self, name: &str) -> Option<FeatureKind> {
        self.features.iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }
}


/// An ordered sequence of [`Record`]s sharing one [`Schema`].
///
/// The target labels are pulled out of the records at construction,
/// and the label ordering (first appearance in record order) is
/// memoized; it is the global tie-break ordering for every majority
/// decision made over this dataset and any dataset resampled from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Schema,
    records: Vec<Record>,
    targets: Vec<Label>,
    label_order: Vec<Label>,
}


impl Dataset {
    /// Assemble a dataset from records, validating each one against
    /// the schema: the target field must be present and categorical,
    /// and every declared feature must be present with the declared
    /// kind and (for numeric features) a finite value.
    pub fn from_records(schema: Schema, records: Vec<Record>)
        -> Result<Self, SchemaError>
    {
        let mut targets = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let target = record.get(schema.target())
                .ok_or(SchemaError::MissingTarget { row })?;
            let label = match target {
                Value::Categorical(label) => Label::from(label.as_str()),
                Value::Numeric(_) => {
                    return Err(SchemaError::NonCategoricalTarget { row });
                },
            };

            for spec in schema.features() {
                let value = record.get(spec.name())
                    .ok_or_else(|| SchemaError::MissingFeature {
                        row, feature: spec.name().to_string(),
                    })?;
                if value.kind() != spec.kind() {
                    return Err(SchemaError::KindMismatch {
                        row, feature: spec.name().to_string(),
                    });
                }
                if let Value::Numeric(x) = value {
                    if !x.is_finite() {
                        return Err(SchemaError::NonFiniteValue {
                            row, feature: spec.name().to_string(),
                        });
                    }
                }
            }
            targets.push(label);
        }

        let label_order = label_order_of(&targets);
        Ok(Self { schema, records, targets, label_order })
    }


    /// Convert a `polars::DataFrame` and a target `Series` into a
    /// dataset. This is the seam to an external ingestion collaborator:
    /// `Utf8` columns become categorical features, numeric columns are
    /// cast to `f64`, and the target series must be `Utf8`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self, SchemaError>
    {
        let n_sample = data.height();
        if target.len() != n_sample {
            return Err(SchemaError::TargetLengthMismatch {
                expected: n_sample,
                got: target.len(),
            });
        }

        let target_name = target.name().to_string();
        let labels = target.utf8()
            .map_err(|_| SchemaError::UnsupportedColumn {
                column: target_name.clone(),
                dtype: target.dtype().to_string(),
            })?;
        let mut targets = Vec::with_capacity(n_sample);
        for (row, label) in labels.into_iter().enumerate() {
            let label = label.ok_or_else(|| SchemaError::NullValue {
                row, feature: target_name.clone(),
            })?;
            targets.push(Label::from(label));
        }

        let mut schema = Schema::new(&target_name);
        let mut records = vec![Record::new(); n_sample];
        for series in data.get_columns() {
            let name = series.name().to_string();
            if name == target_name { continue; }

            match series.dtype() {
                DataType::Utf8 => {
                    let column = series.utf8()
                        .expect("dtype checked to be Utf8");
                    for (row, value) in column.into_iter().enumerate() {
                        let value = value
                            .ok_or_else(|| SchemaError::NullValue {
                                row, feature: name.clone(),
                            })?;
                        records[row].insert(name.clone(), value);
                    }
                    schema = schema.categorical(&name);
                },
                dtype if dtype.is_numeric() => {
                    let column = series.cast(&DataType::Float64)
                        .map_err(|_| SchemaError::UnsupportedColumn {
                            column: name.clone(),
                            dtype: dtype.to_string(),
                        })?;
                    let column = column.f64()
                        .expect("column cast to Float64 above");
                    for (row, value) in column.into_iter().enumerate() {
                        let x = value
                            .ok_or_else(|| SchemaError::NullValue {
                                row, feature: name.clone(),
                            })?;
                        if !x.is_finite() {
                            return Err(SchemaError::NonFiniteValue {
                                row, feature: name.clone(),
                            });
                        }
                        records[row].insert(name.clone(), x);
                    }
                    schema = schema.numeric(&name);
                },
                dtype => {
                    return Err(SchemaError::UnsupportedColumn {
                        column: name.clone(),
                        dtype: dtype.to_string(),
                    });
                },
            }
        }

        let label_order = label_order_of(&targets);
        Ok(Self { schema, records, targets, label_order })
    }


    /// Returns the schema.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if the dataset has zero records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the pair of the number of records and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.schema.features().len())
    }


    /// Returns the `row`-th record.
    #[inline]
    pub fn record(&self, row: usize) -> &Record {
        &self.records[row]
    }


    /// Returns all records in order.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns the true label of the `row`-th record.
    #[inline]
    pub fn target(&self, row: usize) -> &Label {
        &self.targets[row]
    }


    /// Returns the distinct labels in order of first appearance.
    /// This ordering breaks ties in every majority decision.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.label_order[..]
    }


    /// Build a new dataset from the rows at `indices`, in order.
    /// Indices may repeat or omit rows, so this is the primitive
    /// behind bootstrap resampling and fold splitting. The schema
    /// and the parent's label ordering are preserved, even when the
    /// selection drops some labels entirely.
    pub fn take(&self, indices: &[usize]) -> Self {
        let records = indices.iter()
            .map(|&i| self.records[i].clone())
            .collect();
        let targets = indices.iter()
            .map(|&i| self.targets[i].clone())
            .collect();

        Self {
            schema: self.schema.clone(),
            records,
            targets,
            label_order: self.label_order.clone(),
        }
    }


    /// Split the rows listed in `ix` into a `(train, test)` pair,
    /// where the test part is `ix[start..end]` and the train part is
    /// the rest of `ix`, both in order.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let test = ix[start..end].to_vec();
        let train = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();

        (self.take(&train), self.take(&test))
    }
}


impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_sample, n_feature) = self.shape();
        write!(
            f,
            "Dataset [{n_sample} records x {n_feature} features, \
             target `{}`]",
            self.schema.target(),
        )
    }
}


/// Distinct labels in order of first appearance.
fn label_order_of(targets: &[Label]) -> Vec<Label> {
    let mut order = Vec::new();
    for label in targets {
        if !order.contains(label) {
            order.push(label.clone());
        }
    }
    order
}


#[cfg(test)]
mod tests {
    use super::*;


    fn loan_schema() -> Schema {
        Schema::new("approved")
            .categorical("history")
            .numeric("revenue")
    }


    #[test]
    fn validates_missing_feature() {
        let records = vec![
            Record::new().set("history", "bad").set("approved", "no"),
        ];
        let err = Dataset::from_records(loan_schema(), records).unwrap_err();
        assert!(matches!(err, SchemaError::MissingFeature { row: 0, .. }));
    }


    #[test]
    fn validates_kind_mismatch() {
        let records = vec![
            Record::new()
                .set("history", 3.0)
                .set("revenue", 2000.0)
                .set("approved", "no"),
        ];
        let err = Dataset::from_records(loan_schema(), records).unwrap_err();
        assert!(matches!(err, SchemaError::KindMismatch { row: 0, .. }));
    }


    #[test]
    fn validates_numeric_target() {
        let records = vec![
            Record::new()
                .set("history", "bad")
                .set("revenue", 2000.0)
                .set("approved", 0.0),
        ];
        let err = Dataset::from_records(loan_schema(), records).unwrap_err();
        assert!(matches!(err, SchemaError::NonCategoricalTarget { row: 0 }));
    }


    #[test]
    fn label_order_follows_first_appearance() {
        let records = vec![
            Record::new()
                .set("history", "bad").set("revenue", 1.0)
                .set("approved", "no"),
            Record::new()
                .set("history", "good").set("revenue", 2.0)
                .set("approved", "yes"),
            Record::new()
                .set("history", "bad").set("revenue", 3.0)
                .set("approved", "no"),
        ];
        let data = Dataset::from_records(loan_schema(), records).unwrap();
        assert_eq!(data.labels(), &[Label::from("no"), Label::from("yes")]);
    }


    #[test]
    fn take_preserves_label_order() {
        let records = vec![
            Record::new()
                .set("history", "bad").set("revenue", 1.0)
                .set("approved", "no"),
            Record::new()
                .set("history", "good").set("revenue", 2.0)
                .set("approved", "yes"),
        ];
        let data = Dataset::from_records(loan_schema(), records).unwrap();

        // Only `yes` rows survive, but the ordering keeps both labels.
        let sub = data.take(&[1, 1]);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.labels(), data.labels());
    }


    #[test]
    fn split_partitions_the_index_list() {
        let records = (0..10)
            .map(|i| {
                Record::new()
                    .set("history", "good")
                    .set("revenue", i as f64)
                    .set("approved", "yes")
            })
            .collect();
        let data = Dataset::from_records(loan_schema(), records).unwrap();

        let ix = (0..10).collect::<Vec<_>>();
        let (train, test) = data.split(&ix, 2, 5);
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);
    }
}
