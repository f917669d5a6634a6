//! Helper functions.

/// Flatten the nested vectors to a continuous row-major vector.
pub fn as_continuous_vec<T: Copy>(mat: &[Vec<T>]) -> Vec<T> {
    mat.iter().flat_map(|v| v.iter().copied()).collect()
}

/// Convert a continuous row-major vector to nested vectors.
pub fn as_matrix<T: Copy>(vec: &[T], dim: usize) -> Vec<Vec<T>> {
    vec.chunks(dim).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod test {
    use super::{as_continuous_vec, as_matrix};

    #[test]
    fn test_round_trip() {
        let mat = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let flat = as_continuous_vec(&mat);
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(as_matrix(&flat, 2), mat);
    }
}
