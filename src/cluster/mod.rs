//! K-means partitioning for dense vectors.
//!
//! This module provides the [`Kmeans`] engine and the state it produces.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat until no point
//! changes cluster.
//!
//! **Objective**: Minimize within-cluster dispersion:
//!
//! ```text
//! WC = Σ_k Σ_{x ∈ C_k} d(x, μ_k)
//! ```
//!
//! where `d` is the injected distance metric and `μ_k` the mean of cluster
//! `k`. The complementary separation measure is
//!
//! ```text
//! BC = Σ_{i<j} d(μ_i, μ_j)
//! ```
//!
//! Tight, well-separated partitions have low WC and high BC.
//!
//! **Assumptions**:
//! - Clusters are roughly spherical under the chosen metric
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//!
//! // Hard partition from explicit starting centroids.
//! let fit = Kmeans::new(2)
//!     .with_centroids(vec![vec![0.0, 0.0], vec![10.0, 0.0]])
//!     .fit(&data)
//!     .unwrap();
//!
//! assert_eq!(fit.assignments(), &[0, 0, 1, 1]);
//! assert!(fit.bc().unwrap() > fit.wc().unwrap());
//!
//! // Or labels only, with sampled centroids.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

mod kmeans;
mod traits;

pub use kmeans::{Cluster, Kmeans, KmeansFit};
pub use traits::Clustering;
