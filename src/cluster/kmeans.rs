//! K-means clustering (Lloyd's algorithm).
//!
//! Partitions data into k clusters by alternating two phases until the
//! partition stops changing:
//!
//! 1. **Assign**: each point goes to its nearest centroid.
//! 2. **Update**: each centroid becomes the mean of its members.
//!
//! The loop halts as soon as an assign phase moves no point, which can
//! happen on the very first phase when the initial centroids already
//! describe a stable partition. There is no iteration cap unless one is
//! configured with [`Kmeans::with_max_iter`].
//!
//! # Initialization
//!
//! Initial centroids are either supplied explicitly
//! ([`Kmeans::with_centroids`]) or sampled uniformly from the dataset,
//! with replacement. Sampling with replacement means duplicate initial
//! centroids are possible; the duplicates lose every tie and end up as
//! empty clusters.
//!
//! # Ties and empty clusters
//!
//! Candidate centroids are scanned in index order and only a strictly
//! smaller distance wins, so a point equidistant to several centroids goes
//! to the lowest index. A cluster that loses all members keeps its previous
//! centroid; the stale centroid still participates in later assign phases
//! and in [`KmeansFit::bc`], but asking the empty cluster for a centroid or
//! compactness reports [`Error::EmptyCluster`].
//!
//! # Quality measures
//!
//! - [`KmeansFit::wc`] (within clusters): sum of member-to-centroid
//!   distances over all clusters. Lower means tighter clusters.
//! - [`KmeansFit::bc`] (between clusters): sum of pairwise centroid
//!   distances. Higher means better separated clusters.
//! - [`KmeansFit::quality_ratio`]: `bc / wc`, pinned to `0.0` when `wc`
//!   is zero.
//!
//! # Complexity
//!
//! Each iteration is O(n·k·d) time; the fit state is O(n + k·d) space.
//! The assign phase is independent per point and could be parallelized
//! behind a barrier, but this implementation stays single-threaded.

use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::metric::{DistanceMetric, Euclidean};
use log::{debug, warn};
use rand::prelude::*;
use std::sync::Arc;

/// K-means clustering engine.
///
/// Configured with a builder, run with [`Kmeans::fit`] (full final state)
/// or [`Clustering::fit_predict`] (labels only).
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Distance metric, injected at construction.
    metric: Arc<dyn DistanceMetric>,
    /// Explicit initial centroids; random sampling when `None`.
    initial_centroids: Option<Vec<Vec<f32>>>,
    /// Random seed for centroid sampling.
    seed: Option<u64>,
    /// Optional cap on assign phases.
    max_iter: Option<usize>,
}

impl Kmeans {
    /// Create a new k-means engine with the Euclidean metric, random
    /// initialization, and no iteration cap.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Arc::new(Euclidean),
            initial_centroids: None,
            seed: None,
            max_iter: None,
        }
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: impl DistanceMetric + 'static) -> Self {
        self.metric = Arc::new(metric);
        self
    }

    /// Supply explicit initial centroids instead of sampling them.
    ///
    /// `fit` fails with [`Error::InvalidCentroids`] unless exactly `k`
    /// centroids are given, and with [`Error::DimensionMismatch`] if any
    /// centroid's dimensionality differs from the dataset's.
    pub fn with_centroids(mut self, centroids: Vec<Vec<f32>>) -> Self {
        self.initial_centroids = Some(centroids);
        self
    }

    /// Set the random seed for initial centroid sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of assign phases.
    ///
    /// Without a cap the loop runs until the partition is stable.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Run the algorithm and return the final clustering state.
    pub fn fit<'a>(&self, data: &'a [Vec<f32>]) -> Result<KmeansFit<'a>> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let dim = data[0].len();
        for point in data {
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: point.len(),
                });
            }
        }

        let mut centroids = self.starting_centroids(data, dim)?;

        let mut assignments = vec![0usize; n];
        let mut distances = vec![0.0f32; n];

        let mut moved = self.assign(data, &centroids, &mut assignments, &mut distances)?;
        let mut iterations = 1usize;
        debug!("kmeans: iteration {iterations}: {moved} points reassigned");

        while moved > 0 {
            if let Some(cap) = self.max_iter {
                if iterations >= cap {
                    debug!("kmeans: stopping at iteration cap {cap}");
                    break;
                }
            }

            self.update_centroids(data, &assignments, &mut centroids);

            moved = self.assign(data, &centroids, &mut assignments, &mut distances)?;
            iterations += 1;
            debug!("kmeans: iteration {iterations}: {moved} points reassigned");
        }

        if moved == 0 {
            debug!("kmeans: converged after {iterations} assign phases");
        }

        // Membership index sets, derived from the assignment vector so the
        // two can never disagree.
        let mut clusters = vec![Vec::new(); self.k];
        for (i, &c) in assignments.iter().enumerate() {
            clusters[c].push(i);
        }

        Ok(KmeansFit {
            data,
            metric: Arc::clone(&self.metric),
            centroids,
            assignments,
            distances,
            clusters,
            iterations,
        })
    }

    /// Validate explicit centroids, or sample k points with replacement.
    fn starting_centroids(&self, data: &[Vec<f32>], dim: usize) -> Result<Vec<Vec<f32>>> {
        match &self.initial_centroids {
            Some(supplied) => {
                if supplied.len() != self.k {
                    return Err(Error::InvalidCentroids {
                        expected: self.k,
                        found: supplied.len(),
                    });
                }
                for centroid in supplied {
                    if centroid.len() != dim {
                        return Err(Error::DimensionMismatch {
                            expected: dim,
                            found: centroid.len(),
                        });
                    }
                }
                Ok(supplied.clone())
            }
            None => {
                let mut rng: Box<dyn RngCore> = match self.seed {
                    Some(s) => Box::new(StdRng::seed_from_u64(s)),
                    None => Box::new(rand::rng()),
                };
                Ok((0..self.k)
                    .map(|_| data[rng.random_range(0..data.len())].clone())
                    .collect())
            }
        }
    }

    /// Assign every point to its nearest centroid.
    ///
    /// Returns the number of points whose assignment changed, and refreshes
    /// the cached point-to-centroid distances.
    fn assign(
        &self,
        data: &[Vec<f32>],
        centroids: &[Vec<f32>],
        assignments: &mut [usize],
        distances: &mut [f32],
    ) -> Result<usize> {
        let mut moved = 0usize;

        for (i, point) in data.iter().enumerate() {
            let mut best = 0usize;
            let mut best_dist = self.metric.distance(point, &centroids[0])?;

            for (c, centroid) in centroids.iter().enumerate().skip(1) {
                let dist = self.metric.distance(point, centroid)?;
                // Strictly smaller only: ties keep the lowest index.
                if dist < best_dist {
                    best_dist = dist;
                    best = c;
                }
            }

            if assignments[i] != best {
                assignments[i] = best;
                moved += 1;
            }
            distances[i] = best_dist;
        }

        Ok(moved)
    }

    /// Move every centroid to the mean of its members.
    ///
    /// A cluster with no members keeps its previous centroid.
    fn update_centroids(
        &self,
        data: &[Vec<f32>],
        assignments: &[usize],
        centroids: &mut [Vec<f32>],
    ) {
        let dim = data[0].len();
        let mut sums = vec![vec![0.0f32; dim]; self.k];
        let mut counts = vec![0usize; self.k];

        for (point, &c) in data.iter().zip(assignments) {
            counts[c] += 1;
            for (sum, x) in sums[c].iter_mut().zip(point) {
                *sum += x;
            }
        }

        for c in 0..self.k {
            if counts[c] == 0 {
                warn!("kmeans: cluster {c} is empty, keeping its previous centroid");
                continue;
            }
            let count = counts[c] as f32;
            for (coord, sum) in centroids[c].iter_mut().zip(&sums[c]) {
                *coord = *sum / count;
            }
        }
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.assignments)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Final state of a k-means run.
///
/// Borrows the dataset it was fitted on; cluster membership is stored as
/// index sets over that dataset, paired with a parallel assignment vector.
#[derive(Debug, Clone)]
pub struct KmeansFit<'a> {
    data: &'a [Vec<f32>],
    metric: Arc<dyn DistanceMetric>,
    /// Final centroid array; stale for clusters that ended up empty.
    centroids: Vec<Vec<f32>>,
    /// Cluster id per point.
    assignments: Vec<usize>,
    /// Cached distance from each point to its assigned centroid.
    distances: Vec<f32>,
    /// Member indices per cluster.
    clusters: Vec<Vec<usize>>,
    /// Assign phases executed.
    iterations: usize,
}

impl<'a> KmeansFit<'a> {
    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Cluster id per point, parallel to the dataset.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Final centroid array.
    ///
    /// A cluster that ended up empty keeps the last centroid it had, so
    /// entries here are not necessarily member means; see
    /// [`Cluster::centroid`] for the mean of the actual members.
    pub fn centroids(&self) -> &[Vec<f32>] {
        &self.centroids
    }

    /// Distance from each point to its assigned centroid, as of the final
    /// assign phase.
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Number of assign phases executed before the run stopped.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// View of one cluster.
    ///
    /// # Panics
    ///
    /// Panics if `id >= k`.
    pub fn cluster(&self, id: usize) -> Cluster<'_> {
        Cluster {
            id,
            data: self.data,
            members: &self.clusters[id],
        }
    }

    /// Iterate over all k clusters.
    pub fn clusters(&self) -> impl Iterator<Item = Cluster<'_>> {
        self.clusters
            .iter()
            .enumerate()
            .map(|(id, members)| Cluster {
                id,
                data: self.data,
                members,
            })
    }

    /// Within-cluster compactness: the sum over all clusters of the
    /// member-to-centroid distance sum. Lower is tighter.
    ///
    /// Fails with [`Error::EmptyCluster`] if any cluster has no members.
    pub fn wc(&self) -> Result<f64> {
        let mut total = 0.0;
        for cluster in self.clusters() {
            total += cluster.compactness(self.metric.as_ref())?;
        }
        Ok(total)
    }

    /// Between-cluster separation: the sum of distances over all unordered
    /// pairs of distinct centroids. Higher is better separated.
    pub fn bc(&self) -> Result<f64> {
        let mut total = 0.0;
        for i in 0..self.centroids.len() {
            for j in (i + 1)..self.centroids.len() {
                total += f64::from(self.metric.distance(&self.centroids[i], &self.centroids[j])?);
            }
        }
        Ok(total)
    }

    /// Separation-to-compactness ratio `bc / wc`.
    ///
    /// Exactly `0.0` when `wc` is zero, so a run whose clusters collapse to
    /// identical points reports a defined ratio instead of infinity.
    pub fn quality_ratio(&self) -> Result<f64> {
        let wc = self.wc()?;
        if wc == 0.0 {
            return Ok(0.0);
        }
        Ok(self.bc()? / wc)
    }
}

/// Read-only view of one cluster: an id plus member indices over the
/// fitted dataset.
#[derive(Debug, Clone, Copy)]
pub struct Cluster<'a> {
    id: usize,
    data: &'a [Vec<f32>],
    members: &'a [usize],
}

impl<'a> Cluster<'a> {
    /// Cluster id in `[0, k)`.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member indices into the fitted dataset.
    pub fn members(&self) -> &'a [usize] {
        self.members
    }

    /// Iterate over member coordinate vectors.
    pub fn points(&self) -> impl Iterator<Item = &'a [f32]> + 'a {
        let data = self.data;
        let members = self.members;
        members.iter().map(move |&i| data[i].as_slice())
    }

    /// Coordinate-wise mean of the members.
    ///
    /// Fails with [`Error::EmptyCluster`] when there are no members.
    pub fn centroid(&self) -> Result<Vec<f32>> {
        if self.members.is_empty() {
            return Err(Error::EmptyCluster { cluster: self.id });
        }

        let dim = self.data[self.members[0]].len();
        let mut mean = vec![0.0f32; dim];
        for point in self.points() {
            for (m, x) in mean.iter_mut().zip(point) {
                *m += x;
            }
        }

        let count = self.members.len() as f32;
        for m in &mut mean {
            *m /= count;
        }
        Ok(mean)
    }

    /// Sum of member distances to the cluster mean under `metric`.
    ///
    /// Fails with [`Error::EmptyCluster`] when there are no members.
    pub fn compactness(&self, metric: &dyn DistanceMetric) -> Result<f64> {
        let centroid = self.centroid()?;
        let mut sum = 0.0f64;
        for point in self.points() {
            sum += f64::from(metric.distance(point, &centroid)?);
        }
        Ok(sum)
    }
}
