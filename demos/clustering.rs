//! K-means on a simple 2D dataset, with the WC/BC quality measures.
//!
//! Run with `RUST_LOG=debug` to see per-iteration progress.

use lloyd::{Chebyshev, Clustering, Euclidean, Kmeans, Manhattan};

fn main() {
    env_logger::init();

    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    // --- Sampled centroids, labels only ---
    let labels = Kmeans::new(3).with_seed(42).fit_predict(&data).unwrap();
    println!("=== K-means (k=3, sampled centroids) ===");
    for (i, label) in labels.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => cluster {}",
            i, data[i][0], data[i][1], label
        );
    }

    // --- Explicit centroids, full fit with quality measures ---
    let centroids = vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![10.0, 0.0]];

    println!("\n=== Quality by metric (explicit centroids) ===");
    report("euclidean", Kmeans::new(3).with_metric(Euclidean), &centroids, &data);
    report("manhattan", Kmeans::new(3).with_metric(Manhattan), &centroids, &data);
    report("chebyshev", Kmeans::new(3).with_metric(Chebyshev), &centroids, &data);
}

fn report(name: &str, kmeans: Kmeans, centroids: &[Vec<f32>], data: &[Vec<f32>]) {
    let fit = kmeans
        .with_centroids(centroids.to_vec())
        .fit(data)
        .unwrap();

    println!(
        "  {:9} iterations={} WC={:.3} BC={:.3} BC/WC={:.3}",
        name,
        fit.iterations(),
        fit.wc().unwrap(),
        fit.bc().unwrap(),
        fit.quality_ratio().unwrap()
    );

    for cluster in fit.clusters() {
        println!(
            "    cluster {}: {} members, centroid {:?}",
            cluster.id(),
            cluster.len(),
            cluster.centroid().unwrap()
        );
    }
}
