use minicart::prelude::*;
use minicart::CrossValidation;


fn striped_data(n: usize) -> Dataset {
    let schema = Schema::new("label")
        .numeric("x")
        .categorical("parity");
    let records = (0..n)
        .map(|i| {
            let parity = if i % 2 == 0 { "even" } else { "odd" };
            Record::new()
                .set("x", i as f64)
                .set("parity", parity)
                .set("label", parity)
        })
        .collect();
    Dataset::from_records(schema, records).unwrap()
}


#[test]
fn every_fold_trains_and_scores() {
    let data = striped_data(20);

    let cv = CrossValidation::new(&data)
        .n_folds(5)
        .seed(777)
        .shuffle();

    let mut n_folds = 0;
    for (train, test) in cv {
        let forest = ForestBuilder::new(&train)
            .n_trees(5)
            .seed(7)
            .bootstrap(false)
            .fit()
            .unwrap();

        // The parity column copies the label, so every tree splits
        // on it and held-out accuracy is perfect.
        assert_eq!(forest.score(&test).unwrap(), 1.0);
        n_folds += 1;
    }
    assert_eq!(n_folds, 5);
}
