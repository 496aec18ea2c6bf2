use thiserror::Error;

/// Errors returned by the clustering engine and distance metrics.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Two vectors compared by a metric, or a centroid checked against the
    /// dataset, have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// An explicit initial centroid set does not have exactly k entries.
    #[error("invalid centroids: expected {expected}, found {found}")]
    InvalidCentroids {
        /// Configured number of clusters.
        expected: usize,
        /// Number of centroids supplied.
        found: usize,
    },

    /// A centroid or compactness computation was requested on a cluster
    /// with no members.
    #[error("cluster {cluster} has no members")]
    EmptyCluster {
        /// Cluster id.
        cluster: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
