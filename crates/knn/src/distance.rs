//! Distance measures between feature vectors.

use std::fmt;

use crate::error::KnnError;

/// A symmetric, non-negative dissimilarity between two feature vectors.
///
/// Implementations must return `Ok(d)` with `d >= 0` and
/// `compute(a, b) == compute(b, a)` whenever `a.len() == b.len()`, and
/// [`KnnError::DimensionMismatch`] otherwise. Vectors are never truncated or
/// padded to make lengths agree.
pub trait DistanceMeasure {
    /// Human-readable name, used in run reports.
    fn name(&self) -> &str;

    /// Computes the distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::DimensionMismatch`] if the lengths differ.
    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError>;
}

#[inline]
fn check_dims(a: &[f64], b: &[f64]) -> Result<(), KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Straight-line (L2) distance: `sqrt(Σ (aᵢ − bᵢ)²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMeasure for Euclidean {
    fn name(&self) -> &str {
        "Euclidean"
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        check_dims(a, b)?;
        let sq: f64 = a
            .iter()
            .zip(b)
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum();
        Ok(sq.sqrt())
    }
}

/// City-block (L1) distance: `Σ |aᵢ − bᵢ|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceMeasure for Manhattan {
    fn name(&self) -> &str {
        "Manhattan"
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
    }
}

/// Maximum-coordinate (L∞) distance: `maxᵢ |aᵢ − bᵢ|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl DistanceMeasure for Chebyshev {
    fn name(&self) -> &str {
        "Chebyshev"
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        check_dims(a, b)?;
        Ok(a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }
}

/// Canberra distance: `Σ |aᵢ − bᵢ| / (|aᵢ| + |bᵢ|)`.
///
/// Coordinates where both values are zero contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canberra;

impl DistanceMeasure for Canberra {
    fn name(&self) -> &str {
        "Canberra"
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        check_dims(a, b)?;
        Ok(a.iter()
            .zip(b)
            .map(|(x, y)| {
                let num = (x - y).abs();
                let denom = x.abs() + y.abs();
                if num == 0.0 && denom == 0.0 {
                    0.0
                } else {
                    num / denom
                }
            })
            .sum())
    }
}

/// Built-in distance measures, selectable at configuration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// See [`Euclidean`].
    #[default]
    Euclidean,
    /// See [`Manhattan`].
    Manhattan,
    /// See [`Chebyshev`].
    Chebyshev,
    /// See [`Canberra`].
    Canberra,
}

impl Metric {
    /// Every built-in metric, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Chebyshev,
        Metric::Canberra,
    ];
}

impl DistanceMeasure for Metric {
    fn name(&self) -> &str {
        match self {
            Metric::Euclidean => Euclidean.name(),
            Metric::Manhattan => Manhattan.name(),
            Metric::Chebyshev => Chebyshev.name(),
            Metric::Canberra => Canberra.name(),
        }
    }

    fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        match self {
            Metric::Euclidean => Euclidean.compute(a, b),
            Metric::Manhattan => Manhattan.compute(a, b),
            Metric::Chebyshev => Chebyshev.compute(a, b),
            Metric::Canberra => Canberra.compute(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
