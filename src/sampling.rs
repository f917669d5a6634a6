//! Sampling without replacement.

use rand::Rng;
use rand::seq::index;

/// Select `amount` distinct points uniformly at random, preserving the
/// sampled order.
///
/// Panics when `amount` exceeds the number of points, so callers validate
/// first.
pub fn subsample<R: Rng + ?Sized>(
    rng: &mut R,
    amount: usize,
    points: &[f64],
    dim: usize,
) -> Vec<f64> {
    let num = points.len() / dim;
    let mut sampled = Vec::with_capacity(amount * dim);
    for i in index::sample(rng, num, amount) {
        sampled.extend_from_slice(&points[i * dim..(i + 1) * dim]);
    }
    sampled
}
