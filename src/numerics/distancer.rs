use std::fmt;

use crate::numerics::hamming::{
    MIN_VECTORIZED_LEN, compute_hamming_distance, hamming_distance_scalar,
};

/// Raised when two vectors handed to a distance computation cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// The vectors have different dimensions.
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "vector lengths differ: {expected} vs {got}")
            }
        }
    }
}

impl std::error::Error for DistanceError {}

/// Entry point for Hamming distances on vectors of arbitrary length.
///
/// Lengths are checked here rather than in the kernel. Vectors of at least
/// [`MIN_VECTORIZED_LEN`] elements go through the SIMD kernel, shorter ones through
/// the scalar loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct HammingProvider;

impl HammingProvider {
    pub fn new() -> Self {
        HammingProvider
    }

    pub fn metric_name(&self) -> &'static str {
        "hamming"
    }

    pub fn single_dist(&self, a: &[f32], b: &[f32]) -> Result<f32, DistanceError> {
        if a.len() != b.len() {
            return Err(DistanceError::LengthMismatch {
                expected: a.len(),
                got: b.len(),
            });
        }

        if a.len() >= MIN_VECTORIZED_LEN {
            Ok(compute_hamming_distance(a, b, a.len()))
        } else {
            Ok(hamming_distance_scalar(a, b))
        }
    }

    /// Binds a query vector, so that it can be compared to many others.
    pub fn new_distancer<'a>(&self, vec: &'a [f32]) -> HammingDistancer<'a> {
        HammingDistancer {
            provider: *self,
            vec,
        }
    }

    /// Mismatch count of one segment. Summing steps over any segmentation of two
    /// vectors and passing the sum to [`wrap`](Self::wrap) gives their distance.
    pub fn step(&self, x: &[f32], y: &[f32]) -> f32 {
        hamming_distance_scalar(x, y)
    }

    pub fn wrap(&self, x: f32) -> f32 {
        x
    }
}

/// A query vector bound to a [`HammingProvider`].
#[derive(Debug, Clone, Copy)]
pub struct HammingDistancer<'a> {
    provider: HammingProvider,
    vec: &'a [f32],
}

impl HammingDistancer<'_> {
    pub fn distance(&self, other: &[f32]) -> Result<f32, DistanceError> {
        self.provider.single_dist(self.vec, other)
    }

    pub fn dim(&self) -> usize {
        self.vec.len()
    }
}
