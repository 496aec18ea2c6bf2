//! Distance metrics for dense vectors.
//!
//! A metric is a stateless strategy that scores the dissimilarity of two
//! equal-dimension vectors. The engine takes the metric as an injected
//! trait object, so swapping the notion of "near" never touches the
//! assign/update loop itself.
//!
//! ## Provided metrics
//!
//! - [`Euclidean`]: the L2 norm of the difference. The default, and the
//!   usual choice for k-means since centroid means minimize squared L2
//!   dispersion.
//! - [`Manhattan`]: the L1 (city-block) norm of the difference.
//! - [`SqrtManhattan`]: the square root of the L1 sum. Not a canonical
//!   norm; provided for compatibility with implementations that apply a
//!   Euclidean-style root to the absolute-difference sum.
//! - [`Chebyshev`]: the L∞ norm (largest single coordinate difference).
//!
//! All metrics are symmetric and non-negative. Euclidean and Manhattan are
//! zero exactly when the two vectors are equal; Chebyshev shares that
//! property since it bounds every coordinate difference from above.
//!
//! Comparing vectors of different dimensionality is an error
//! ([`Error::DimensionMismatch`]), never silent truncation.

use crate::error::{Error, Result};
use std::fmt;

/// Strategy trait for scoring the dissimilarity of two vectors.
pub trait DistanceMetric: fmt::Debug + Send + Sync {
    /// Distance between `a` and `b`.
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors differ in length.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32>;
}

#[inline]
fn check_dims(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

/// Euclidean (L2) distance: `sqrt(Σ (a_i - b_i)²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        check_dims(a, b)?;
        let sum: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
        Ok(sum.sqrt())
    }
}

/// Manhattan (L1, city-block) distance: `Σ |a_i - b_i|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
    }
}

/// Square root of the city-block sum: `sqrt(Σ |a_i - b_i|)`.
///
/// This is **not** the canonical L1 metric; see [`Manhattan`] for that.
/// It compresses large separations the way L2 does while keeping L1's
/// per-coordinate accumulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqrtManhattan;

impl DistanceMetric for SqrtManhattan {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        check_dims(a, b)?;
        let sum: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
        Ok(sum.sqrt())
    }
}

/// Chebyshev (L∞) distance: `max_i |a_i - b_i|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl DistanceMetric for Chebyshev {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        check_dims(a, b)?;
        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f32::max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_known_value() {
        let d = Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn euclidean_symmetric_and_zero_iff_equal() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 0.0, -1.0];

        let ab = Euclidean.distance(&a, &b).unwrap();
        let ba = Euclidean.distance(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert!(ab > 0.0);

        assert_eq!(Euclidean.distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn manhattan_known_value() {
        let d = Manhattan.distance(&[0.0, 0.0], &[3.0, -4.0]).unwrap();
        assert!((d - 7.0).abs() < 1e-6);
    }

    #[test]
    fn sqrt_manhattan_is_root_of_l1_sum() {
        let a = [0.0, 0.0];
        let b = [3.0, -4.0];

        let l1 = Manhattan.distance(&a, &b).unwrap();
        let d = SqrtManhattan.distance(&a, &b).unwrap();
        assert!((d - l1.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn chebyshev_known_value() {
        let d = Chebyshev.distance(&[1.0, 5.0, 2.0], &[2.0, 1.0, 2.0]).unwrap();
        assert!((d - 4.0).abs() < 1e-6);
    }

    #[test]
    fn chebyshev_bounds_every_coordinate_difference() {
        let a = [1.0, -3.0, 7.0, 0.5];
        let b = [2.5, 4.0, 6.0, 0.5];

        let d = Chebyshev.distance(&a, &b).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!(d >= (x - y).abs());
        }
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let metrics: [&dyn DistanceMetric; 4] =
            [&Euclidean, &Manhattan, &SqrtManhattan, &Chebyshev];

        for metric in metrics {
            let result = metric.distance(&[1.0, 2.0], &[1.0]);
            assert!(matches!(
                result,
                Err(Error::DimensionMismatch {
                    expected: 2,
                    found: 1
                })
            ));
        }
    }
}
