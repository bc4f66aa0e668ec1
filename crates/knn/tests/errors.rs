//! Integration tests for KnnError variants.

use loocv_knn::{
    Dataset, DistanceMeasure, Euclidean, Instance, KnnConfig, KnnError, Label, Metric,
    classify_held_out, majority_vote, select_k_nearest,
};

fn three_points() -> Dataset {
    Dataset::new(
        "three",
        vec![
            Instance::new([0.0, 0.0], "A"),
            Instance::new([1.0, 1.0], "A"),
            Instance::new([5.0, 5.0], "B"),
        ],
    )
    .unwrap()
}

#[test]
fn error_dimension_mismatch_3d_vs_4d() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0, 3.0, 0.0];
    assert_eq!(
        Euclidean.compute(&a, &b),
        Err(KnnError::DimensionMismatch { left: 3, right: 4 })
    );
    for metric in Metric::ALL {
        assert!(matches!(
            metric.compute(&a, &b),
            Err(KnnError::DimensionMismatch { left: 3, right: 4 })
        ));
    }
}

#[test]
fn error_insufficient_neighbors_k5_of_3() {
    let ds = three_points();
    let result = classify_held_out(&ds, 0, &KnnConfig::new(5));
    assert!(matches!(
        result,
        Err(KnnError::InsufficientNeighbors { k: 5, available: 2 })
    ));
}

#[test]
fn error_invalid_k() {
    let ds = three_points();
    let result = select_k_nearest(&ds, 0, 0, &Euclidean);
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0 })));
}

#[test]
fn error_empty_neighbors() {
    let none: [Label; 0] = [];
    assert!(matches!(
        majority_vote(&none),
        Err(KnnError::EmptyNeighbors)
    ));
}

#[test]
fn error_query_out_of_range() {
    let ds = three_points();
    let result = classify_held_out(&ds, 3, &KnnConfig::new(1));
    assert!(matches!(
        result,
        Err(KnnError::QueryOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn error_inconsistent_dimension() {
    let result = Dataset::new(
        "ragged",
        vec![
            Instance::new([0.0, 0.0, 0.0], "A"),
            Instance::new([1.0, 1.0, 1.0, 1.0], "B"),
        ],
    );
    assert!(matches!(
        result,
        Err(KnnError::InconsistentDimension {
            index: 1,
            expected: 3,
            got: 4
        })
    ));
}

#[test]
fn error_non_finite_feature() {
    let result = Dataset::new(
        "inf",
        vec![
            Instance::new([0.0], "A"),
            Instance::new([f64::INFINITY], "B"),
        ],
    );
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteFeature { index: 1 })
    ));
}
