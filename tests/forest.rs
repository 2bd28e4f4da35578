use minicart::prelude::*;


fn loan_data() -> Dataset {
    let schema = Schema::new("approved")
        .categorical("history")
        .numeric("revenue");
    let records = vec![
        Record::new()
            .set("history", "good").set("revenue", 4000.0)
            .set("approved", "yes"),
        Record::new()
            .set("history", "bad").set("revenue", 3000.0)
            .set("approved", "no"),
        Record::new()
            .set("history", "good").set("revenue", 1500.0)
            .set("approved", "yes"),
        Record::new()
            .set("history", "bad").set("revenue", 5000.0)
            .set("approved", "no"),
        Record::new()
            .set("history", "good").set("revenue", 2500.0)
            .set("approved", "yes"),
        Record::new()
            .set("history", "bad").set("revenue", 1000.0)
            .set("approved", "no"),
    ];
    Dataset::from_records(schema, records).unwrap()
}


#[test]
fn single_tree_without_bagging_reduces_to_a_decision_tree() {
    let data = loan_data();

    let forest = ForestBuilder::new(&data)
        .n_trees(1)
        .bootstrap(false)
        .fit()
        .unwrap();
    let tree = TreeBuilder::new(&data).fit().unwrap();

    assert_eq!(forest.n_trees(), 1);
    for row in 0..data.len() {
        assert_eq!(
            forest.predict_row(&data, row).unwrap(),
            tree.predict_row(&data, row).unwrap(),
        );
    }
    assert_eq!(
        forest.score(&data).unwrap(),
        tree.score(&data).unwrap(),
    );
}


#[test]
fn same_seed_reproduces_the_forest() {
    let data = loan_data();

    let a = ForestBuilder::new(&data).n_trees(20).seed(42).fit().unwrap();
    let b = ForestBuilder::new(&data).n_trees(20).seed(42).fit().unwrap();

    assert_eq!(a, b);
    assert_eq!(a.branch_counts(), b.branch_counts());
}


#[test]
fn different_seeds_may_disagree_per_tree() {
    let data = loan_data();

    let a = ForestBuilder::new(&data).n_trees(20).seed(1).fit().unwrap();
    let b = ForestBuilder::new(&data).n_trees(20).seed(2).fit().unwrap();

    // The ensembles come from different resamples. Their votes over
    // the training data still agree: the data is cleanly separable.
    assert_eq!(a.score(&data).unwrap(), 1.0);
    assert_eq!(b.score(&data).unwrap(), 1.0);
}


#[test]
fn branch_counts_reports_one_entry_per_tree() {
    let data = loan_data();
    let forest = ForestBuilder::new(&data).n_trees(7).fit().unwrap();

    let counts = forest.branch_counts();
    assert_eq!(counts.len(), 7);
    for (member, count) in forest.trees().iter().zip(&counts) {
        assert_eq!(member.tree().branch_count(), *count);
    }
}


#[test]
fn feature_subsetting_restricts_each_tree() {
    let data = loan_data();
    let forest = ForestBuilder::new(&data)
        .n_trees(10)
        .feature_subset_size(1)
        .fit()
        .unwrap();

    for member in forest.trees() {
        let features = member.features().unwrap();
        assert_eq!(features.len(), 1);
    }
}


#[test]
fn zero_trees_is_rejected() {
    let data = loan_data();
    let err = ForestBuilder::new(&data).n_trees(0).fit().unwrap_err();
    assert!(matches!(err, FitError::InvalidTreeCount { n_trees: 0 }));
}


#[test]
fn oversized_feature_subset_is_rejected() {
    let data = loan_data();
    let err = ForestBuilder::new(&data)
        .feature_subset_size(3)
        .fit()
        .unwrap_err();
    assert!(matches!(
        err,
        FitError::InvalidFeatureSubset { subset_size: 3, n_features: 2 },
    ));
}


#[test]
fn empty_dataset_is_rejected() {
    let schema = Schema::new("approved").numeric("revenue");
    let data = Dataset::from_records(schema, Vec::new()).unwrap();

    let err = ForestBuilder::new(&data).fit().unwrap_err();
    assert!(matches!(err, FitError::EmptyDataset));
}


#[test]
fn unknown_true_labels_count_as_incorrect() {
    let data = loan_data();
    let forest = ForestBuilder::new(&data).fit().unwrap();

    let schema = Schema::new("approved")
        .categorical("history")
        .numeric("revenue");
    let records = vec![
        Record::new()
            .set("history", "good").set("revenue", 4000.0)
            .set("approved", "yes"),
        Record::new()
            .set("history", "good").set("revenue", 2000.0)
            .set("approved", "pending"),
    ];
    let probe = Dataset::from_records(schema, records).unwrap();

    let evaluation = forest.evaluate(&probe).unwrap();
    assert_eq!(evaluation.n_sample, 2);
    assert_eq!(evaluation.n_correct, 1);
    assert_eq!(evaluation.n_unknown_label, 1);
    assert_eq!(evaluation.accuracy(), 0.5);
}


#[test]
fn json_round_trip_preserves_the_forest() {
    let data = loan_data();
    let forest = ForestBuilder::new(&data).n_trees(5).fit().unwrap();

    let path = std::env::temp_dir().join("minicart_forest_roundtrip.json");
    forest.to_json_file(&path).unwrap();
    let loaded = RandomForest::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(forest, loaded);
}
