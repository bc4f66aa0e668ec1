//! K-nearest-neighbor classification by majority vote.
//!
//! This crate provides the classification core: a validated [`Dataset`] of
//! labeled instances, pluggable [`DistanceMeasure`]s, neighbor selection that
//! holds the query out of its own pool, and a deterministic majority vote.
//!
//! | Measure | Formula |
//! |---------|---------|
//! | Euclidean | `sqrt(Σ (aᵢ − bᵢ)²)` (default) |
//! | Manhattan | `Σ \|aᵢ − bᵢ\|` |
//! | Chebyshev | `max \|aᵢ − bᵢ\|` |
//! | Canberra | `Σ \|aᵢ − bᵢ\| / (\|aᵢ\| + \|bᵢ\|)` |
//!
//! # Quick start
//!
//! ```
//! use loocv_knn::{Dataset, Instance, KnnConfig, classify_held_out};
//!
//! let dataset = Dataset::new(
//!     "toy",
//!     vec![
//!         Instance::new([0.0, 0.0], "A"),
//!         Instance::new([0.0, 1.0], "A"),
//!         Instance::new([10.0, 10.0], "B"),
//!         Instance::new([10.0, 11.0], "B"),
//!     ],
//! )
//! .unwrap();
//!
//! let config = KnnConfig::new(1);
//! let predicted = classify_held_out(&dataset, 0, &config).unwrap();
//! assert_eq!(predicted.as_str(), "A");
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify_held_out()
//!   ├─ validate config
//!   ├─ select_k_nearest()      (select.rs, uses distance.rs)
//!   └─ majority_vote()         (vote.rs)
//! ```
//!
//! For loops over every instance, use [`classify_held_out_with_scratch`] with
//! a reusable [`NeighborScratch`].

pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod knn;
pub mod select;
pub mod vote;

pub use config::KnnConfig;
pub use dataset::{Dataset, Instance, Label};
pub use distance::{Canberra, Chebyshev, DistanceMeasure, Euclidean, Manhattan, Metric};
pub use error::KnnError;
pub use knn::{classify_held_out, classify_held_out_with_scratch};
pub use select::{Neighbor, NeighborScratch, select_k_nearest, select_k_nearest_with_scratch};
pub use vote::majority_vote;
