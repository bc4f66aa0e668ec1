//! Edge case integration tests.

use loocv_knn::{
    Dataset, Euclidean, Instance, KnnConfig, Label, classify_held_out, select_k_nearest,
};

/// Two instances, k = 1: each one is predicted from the other.
#[test]
fn minimal_pool() {
    let ds = Dataset::new(
        "pair",
        vec![Instance::new([0.0], "A"), Instance::new([1.0], "B")],
    )
    .unwrap();
    let config = KnnConfig::new(1);
    assert_eq!(classify_held_out(&ds, 0, &config).unwrap().as_str(), "B");
    assert_eq!(classify_held_out(&ds, 1, &config).unwrap().as_str(), "A");
}

/// k = n - 1: the whole remaining pool votes.
#[test]
fn k_equals_pool() {
    let ds = Dataset::new(
        "pool",
        vec![
            Instance::new([0.0], "A"),
            Instance::new([1.0], "B"),
            Instance::new([2.0], "B"),
            Instance::new([3.0], "A"),
        ],
    )
    .unwrap();
    let nn = select_k_nearest(&ds, 0, 3, &Euclidean).unwrap();
    assert_eq!(nn.len(), 3);
    // Pool is B, B, A: B wins outright.
    let config = KnnConfig::new(3);
    assert_eq!(classify_held_out(&ds, 0, &config).unwrap().as_str(), "B");
}

/// Tie on count at k = 4: labels [A, B, A, B] at distances [1, 1, 2, 2].
#[test]
fn tie_break_prefers_nearest_label() {
    let ds = Dataset::new(
        "tie",
        vec![
            Instance::new([0.0], "Q"),
            Instance::new([1.0], "A"),
            Instance::new([-1.0], "B"),
            Instance::new([2.0], "A"),
            Instance::new([-2.0], "B"),
        ],
    )
    .unwrap();

    let nn = select_k_nearest(&ds, 0, 4, &Euclidean).unwrap();
    let distances: Vec<f64> = nn.iter().map(|n| n.distance()).collect();
    assert_eq!(distances, vec![1.0, 1.0, 2.0, 2.0]);
    let labels: Vec<&Label> = nn
        .iter()
        .map(|n| ds.instances()[n.index()].label())
        .collect();
    assert_eq!(
        labels,
        vec![
            &Label::from("A"),
            &Label::from("B"),
            &Label::from("A"),
            &Label::from("B")
        ]
    );

    let predicted = classify_held_out(&ds, 0, &KnnConfig::new(4)).unwrap();
    assert_eq!(predicted.as_str(), "A");
}

/// All instances identical: every distance is zero and dataset order decides.
#[test]
fn identical_instances() {
    let instances = (0..6)
        .map(|i| Instance::new([5.0, 5.0], if i % 2 == 0 { "even" } else { "odd" }))
        .collect();
    let ds = Dataset::new("flat", instances).unwrap();

    let nn = select_k_nearest(&ds, 0, 3, &Euclidean).unwrap();
    assert!(nn.iter().all(|n| n.distance() == 0.0));
    let idx: Vec<usize> = nn.iter().map(|n| n.index()).collect();
    assert_eq!(idx, vec![1, 2, 3]);

    // odd, even, odd
    let predicted = classify_held_out(&ds, 0, &KnnConfig::new(3)).unwrap();
    assert_eq!(predicted.as_str(), "odd");
}

/// Numeric-looking labels are compared as text, never as numbers.
#[test]
fn numeric_labels_are_opaque() {
    let ds = Dataset::new(
        "digits",
        vec![
            Instance::new([0.0], "1"),
            Instance::new([0.1], "1.0"),
            Instance::new([0.2], "1.0"),
            Instance::new([0.3], "1"),
        ],
    )
    .unwrap();
    assert_eq!(ds.n_classes(), 2);
    let predicted = classify_held_out(&ds, 0, &KnnConfig::new(2)).unwrap();
    assert_eq!(predicted.as_str(), "1.0");
}
