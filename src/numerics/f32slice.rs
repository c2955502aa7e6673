use crate::numerics::hamming::hamming_distance;

/// A trait for vector‐like slices of `f32`. The trait only has one implementation,
/// and exists because I could otherwise not add random Impl blocks to the existing
/// `[f32]` type from stdlib.
///
/// # Contract
///
/// - Operations involving two vectors require that they have the same length.
/// - Vectors are expected to hold at least [`MIN_VECTORIZED_LEN`](super::MIN_VECTORIZED_LEN)
///   elements.
pub trait VectorLike {
    fn hamming(&self, othr: &Self) -> f32;
}

impl VectorLike for [f32] {
    /// # Usage
    /// Computes the Hamming distance between two vectors, the number of positions at
    /// which they differ:
    ///
    /// ```text
    /// H(x, y) = Σ_i [x[i] != y[i]]
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different lengths
    #[inline]
    fn hamming(&self, othr: &[f32]) -> f32 {
        assert_eq!(self.len(), othr.len());
        hamming_distance(self, othr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::hamming_distance_scalar;

    #[test]
    fn hamming_matches_scalar() {
        let x: Vec<f32> = (0..37).map(|i| (i % 3) as f32).collect();
        let y: Vec<f32> = (0..37).map(|i| (i % 5) as f32).collect();

        assert_eq!(x.hamming(&y), hamming_distance_scalar(&x, &y));
    }

    #[test]
    fn identical_vectors_have_zero_distance() {
        let x: Vec<f32> = vec![0.25, -1.0, 3.0, 4.0, 0.0, 2.0, -3.5, 1.0].repeat(3);
        assert_eq!(x.hamming(&x), 0.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        let x: Vec<f32> = vec![1.0; 20];
        let y: Vec<f32> = vec![1.0; 21];
        x.hamming(&y);
    }
}
