//! K-means partitioning for dense vectors.
//!
//! `lloyd` is a small library implementing the classical Lloyd/k-means
//! procedure with pluggable distance metrics and cluster quality measures.
//!
//! The primary public API is under [`cluster`], which provides:
//! - the [`Kmeans`] engine (explicit or sampled initial centroids, seedable)
//! - the [`KmeansFit`] result (assignments, centroids, per-cluster views,
//!   WC/BC quality measures)
//!
//! Distance metrics live under [`metric`]: Euclidean (default), Manhattan,
//! Chebyshev, and a square-rooted city-block variant.
//!
//! ```rust
//! use lloyd::{Euclidean, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//!
//! let fit = Kmeans::new(2)
//!     .with_metric(Euclidean)
//!     .with_centroids(vec![vec![0.0, 0.0], vec![10.0, 0.0]])
//!     .fit(&data)
//!     .unwrap();
//!
//! assert_eq!(fit.assignments(), &[0, 0, 1, 1]);
//! assert_eq!(fit.centroids()[0], vec![0.0, 0.5]);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod metric;

pub use cluster::{Cluster, Clustering, Kmeans, KmeansFit};
pub use error::{Error, Result};
pub use metric::{Chebyshev, DistanceMetric, Euclidean, Manhattan, SqrtManhattan};
