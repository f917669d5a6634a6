//! Compute the distance between vectors.

use num_traits::Float;

/// Compute the squared Euclidean distance between two vectors.
pub fn squared_euclidean<T: Float>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc + (l - r) * (l - r))
}

/// Compute the Euclidean (L2) distance between two vectors.
pub fn euclidean<T: Float>(lhs: &[T], rhs: &[T]) -> T {
    squared_euclidean(lhs, rhs).sqrt()
}

/// Find the index of the minimum value in the vector.
///
/// An exact tie resolves to the lowest index.
pub fn argmin<T: PartialOrd>(values: &[T]) -> usize {
    let mut min_idx = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value < values[min_idx] {
            min_idx = i;
        }
    }
    min_idx
}

#[cfg(test)]
mod test {
    use super::{argmin, euclidean, squared_euclidean};

    #[test]
    fn test_squared_euclidean() {
        let lhs = [1.0, 2.0, 3.0];
        let rhs = [4.0, 6.0, 3.0];
        assert_eq!(squared_euclidean(&lhs, &rhs), 25.0);
        assert_eq!(euclidean(&lhs, &rhs), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let vec = [0.1, -7.5, 3.25, 0.0];
        assert_eq!(euclidean(&vec, &vec), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let lhs = [0.3, -1.2, 8.0];
        let rhs = [-2.5, 4.4, 0.7];
        assert_eq!(euclidean(&lhs, &rhs), euclidean(&rhs, &lhs));
    }

    #[test]
    fn test_argmin() {
        assert_eq!(argmin(&[3.0, 1.0, 2.0]), 1);
        assert_eq!(argmin(&[0.5]), 0);
        // exact tie resolves to the lowest index
        assert_eq!(argmin(&[2.0, 2.0, 3.0]), 0);
        assert_eq!(argmin(&[5.0, 4.0, 4.0]), 1);
    }
}
