use minicart::prelude::*;

use polars::prelude::*;


#[test]
fn dataframe_conversion_preserves_columns_and_labels() {
    let history = Series::new("history", &["good", "bad", "good", "bad"]);
    let revenue = Series::new("revenue", &[4000.0, 3000.0, 1500.0, 5000.0]);
    let target = Series::new("approved", &["yes", "no", "yes", "no"]);

    let df = DataFrame::new(vec![history, revenue]).unwrap();
    let data = Dataset::from_dataframe(df, target).unwrap();

    assert_eq!(data.shape(), (4, 2));
    assert_eq!(data.schema().target(), "approved");
    assert_eq!(
        data.schema().kind_of("history"),
        Some(FeatureKind::Categorical),
    );
    assert_eq!(
        data.schema().kind_of("revenue"),
        Some(FeatureKind::Numeric),
    );
    assert_eq!(data.labels(), &[Label::from("yes"), Label::from("no")]);
}


#[test]
fn integer_columns_become_numeric_features() {
    let revenue = Series::new("revenue", &[4000_i64, 3000, 1500]);
    let target = Series::new("approved", &["yes", "no", "yes"]);

    let df = DataFrame::new(vec![revenue]).unwrap();
    let data = Dataset::from_dataframe(df, target).unwrap();

    assert_eq!(
        data.record(0).get("revenue"),
        Some(&Value::from(4000.0)),
    );
}


#[test]
fn converted_data_trains_a_working_tree() {
    let history = Series::new("history", &["good", "bad", "good", "bad"]);
    let revenue = Series::new("revenue", &[4000.0, 3000.0, 1500.0, 5000.0]);
    let target = Series::new("approved", &["yes", "no", "yes", "no"]);

    let df = DataFrame::new(vec![history, revenue]).unwrap();
    let data = Dataset::from_dataframe(df, target).unwrap();

    let tree = TreeBuilder::new(&data).fit().unwrap();
    assert_eq!(tree.score(&data).unwrap(), 1.0);
}


#[test]
fn mismatched_target_length_is_rejected() {
    let revenue = Series::new("revenue", &[1.0, 2.0, 3.0]);
    let target = Series::new("approved", &["yes", "no"]);

    let df = DataFrame::new(vec![revenue]).unwrap();
    let err = Dataset::from_dataframe(df, target).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::TargetLengthMismatch { expected: 3, got: 2 },
    ));
}


#[test]
fn numeric_target_series_is_rejected() {
    let revenue = Series::new("revenue", &[1.0, 2.0]);
    let target = Series::new("approved", &[1_i64, 0]);

    let df = DataFrame::new(vec![revenue]).unwrap();
    let err = Dataset::from_dataframe(df, target).unwrap_err();
    assert!(matches!(err, SchemaError::UnsupportedColumn { .. }));
}
