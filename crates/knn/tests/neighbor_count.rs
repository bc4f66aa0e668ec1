//! Neighbor selection invariants over seeded random datasets.

use loocv_knn::{Dataset, Instance, Metric, select_k_nearest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_dataset(rng: &mut StdRng, n: usize, dim: usize) -> Dataset {
    let instances = (0..n)
        .map(|i| {
            let features: Vec<f64> = (0..dim).map(|_| rng.random_range(-10.0..10.0)).collect();
            Instance::new(features, format!("c{}", i % 3))
        })
        .collect();
    Dataset::new("random", instances).unwrap()
}

#[test]
fn returns_exactly_k_sorted_non_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let n = rng.random_range(2..30);
        let dim = rng.random_range(1..6);
        let ds = random_dataset(&mut rng, n, dim);
        let query = rng.random_range(0..n);

        for k in 1..n {
            for metric in Metric::ALL {
                let nn = select_k_nearest(&ds, query, k, &metric).unwrap();
                assert_eq!(nn.len(), k);
                assert!(nn.iter().all(|c| c.distance() >= 0.0));
                assert!(nn.windows(2).all(|w| w[0].distance() <= w[1].distance()));
                assert!(nn.iter().all(|c| c.index() != query));
            }
        }
    }
}

#[test]
fn selection_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    let ds = random_dataset(&mut rng, 40, 4);
    for query in 0..ds.len() {
        let a = select_k_nearest(&ds, query, 7, &Metric::Euclidean).unwrap();
        let b = select_k_nearest(&ds, query, 7, &Metric::Euclidean).unwrap();
        assert_eq!(a, b);
    }
}
