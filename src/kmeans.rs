//! K-means clustering implementation.

use std::time::Instant;

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::distance::{argmin, euclidean};
use crate::error::{KMeansError, Result};
use crate::sampling::subsample;

const RAYON_BLOCK_SIZE: usize = 64;

/// Compute the row-major `n x k` matrix of Euclidean distances between all
/// points and all centroids in single thread.
pub fn distance_matrix(points: &[f64], centroids: &[f64], dim: usize) -> Vec<f64> {
    let k = centroids.len() / dim;
    let mut distances = vec![0.0; points.len() / dim * k];
    for (i, point) in points.chunks(dim).enumerate() {
        for (j, centroid) in centroids.chunks(dim).enumerate() {
            distances[i * k + j] = euclidean(point, centroid);
        }
    }
    distances
}

/// Compute the row-major `n x k` matrix of Euclidean distances between all
/// points and all centroids in multi-threads.
///
/// The per-row summation order is the same as [`distance_matrix`], so the
/// result is identical to the single-threaded one.
pub fn distance_matrix_parallel(points: &[f64], centroids: &[f64], dim: usize) -> Vec<f64> {
    let k = centroids.len() / dim;
    points
        .par_chunks(dim * RAYON_BLOCK_SIZE)
        .flat_map(|block| {
            let mut rows = Vec::with_capacity(block.len() / dim * k);
            for point in block.chunks(dim) {
                for centroid in centroids.chunks(dim) {
                    rows.push(euclidean(point, centroid));
                }
            }
            rows
        })
        .collect()
}

/// Map each row of the distance matrix to the index of its minimum entry.
///
/// An exact tie selects the lowest centroid index.
pub fn assign_labels(distances: &[f64], k: usize) -> Vec<u32> {
    distances.chunks(k).map(|row| argmin(row) as u32).collect()
}

/// Compute new centroids as the mean of the assigned points.
///
/// A cluster with no assigned points is relocated to a point drawn uniformly
/// at random from the whole point set, independently per empty cluster.
pub fn update_centroids<R: Rng + ?Sized>(
    points: &[f64],
    dim: usize,
    labels: &[u32],
    k: usize,
    rng: &mut R,
) -> Vec<f64> {
    let num = points.len() / dim;
    let mut means = vec![0.0; k * dim];
    let mut elements = vec![0usize; k];
    for (point, &label) in points.chunks(dim).zip(labels.iter()) {
        let label = label as usize;
        elements[label] += 1;
        means[label * dim..(label + 1) * dim]
            .iter_mut()
            .zip(point.iter())
            .for_each(|(m, &v)| *m += v);
    }
    for (i, &element) in elements.iter().enumerate() {
        if element == 0 {
            let target = rng.random_range(0..num);
            means[i * dim..(i + 1) * dim]
                .copy_from_slice(&points[target * dim..(target + 1) * dim]);
            debug!("relocate empty cluster {} to point {}", i, target);
            continue;
        }
        let divider = (element as f64).recip();
        means[i * dim..(i + 1) * dim]
            .iter_mut()
            .for_each(|m| *m *= divider);
    }
    means
}

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: u32,
    max_iters: u32,
}

/// Centroids and per-point labels produced by [`KMeans::fit`].
///
/// `centroids` is a flat row-major `n_clusters x dim` matrix; `labels[i]` is
/// the index of the centroid nearest to point `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Final centroids.
    pub centroids: Vec<f64>,
    /// Index of the nearest centroid for each point.
    pub labels: Vec<u32>,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            n_clusters: 8,
            max_iters: 25,
        }
    }
}

impl KMeans {
    /// Create a new KMeans instance.
    ///
    /// # Arguments
    ///
    /// * `n_clusters` - number of clusters
    /// * `max_iters` - number of Lloyd iterations, always run in full
    pub fn new(n_clusters: u32, max_iters: u32) -> Result<Self> {
        if n_clusters < 1 {
            return Err(KMeansError::InvalidConfig(
                "n_clusters must be greater than 0".into(),
            ));
        }
        if max_iters < 1 {
            return Err(KMeansError::InvalidConfig(
                "max_iters must be greater than 0".into(),
            ));
        }
        Ok(Self {
            n_clusters,
            max_iters,
        })
    }

    /// Fit the KMeans configurations to the given points with the thread RNG.
    pub fn fit(&self, points: &[f64], dim: usize) -> Result<Clustering> {
        self.fit_with_rng(points, dim, &mut rand::rng())
    }

    /// Fit the KMeans configurations to the given points.
    ///
    /// The RNG drives centroid initialization and empty-cluster relocation;
    /// fix its seed for reproducible results. Each call re-initializes from
    /// scratch, so refitting the same instance is valid.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        points: &[f64],
        dim: usize,
        rng: &mut R,
    ) -> Result<Clustering> {
        if dim == 0 {
            return Err(KMeansError::InvalidData(
                "dim must be greater than 0".into(),
            ));
        }
        if points.is_empty() {
            return Err(KMeansError::InvalidData("points must not be empty".into()));
        }
        if points.len() % dim != 0 {
            return Err(KMeansError::InvalidData(format!(
                "points length ({}) is not a multiple of dim ({})",
                points.len(),
                dim
            )));
        }
        let num = points.len() / dim;
        let k = self.n_clusters as usize;
        if num < k {
            return Err(KMeansError::InvalidConfig(format!(
                "number of points ({}) must be at least n_clusters ({})",
                num, k
            )));
        }
        debug!("num of points: {}, num of clusters: {}", num, k);

        let mut centroids = subsample(rng, k, points, dim);
        debug!("start training");
        for i in 0..self.max_iters {
            let start_time = Instant::now();
            #[cfg(feature = "perf")]
            let distances = distance_matrix(points, &centroids, dim);
            #[cfg(not(feature = "perf"))]
            let distances = distance_matrix_parallel(points, &centroids, dim);
            let labels = assign_labels(&distances, k);
            centroids = update_centroids(points, dim, &labels, k, rng);
            debug!("iter {} takes {} s", i, start_time.elapsed().as_secs_f32());
        }

        // assign once more so the labels reflect the centroids we return
        #[cfg(feature = "perf")]
        let distances = distance_matrix(points, &centroids, dim);
        #[cfg(not(feature = "perf"))]
        let distances = distance_matrix_parallel(points, &centroids, dim);
        let labels = assign_labels(&distances, k);

        Ok(Clustering { centroids, labels })
    }
}
