//! Numerical kernels for vector computations.
//!
//! This module provides the SIMD-accelerated Hamming distance over `f32` vectors,
//! built on `std::simd` with four independent accumulators per wide block, plus the
//! length-checked provider and C entry point that sit in front of it.

mod distancer;
mod f32slice;
mod ffi;
mod hamming;

pub use distancer::{DistanceError, HammingDistancer, HammingProvider};
pub use f32slice::VectorLike;
pub use ffi::hamsimd_hamming;
pub use hamming::{
    LaneWidth, MIN_VECTORIZED_LEN, SIMD_LANECOUNT, UNROLL, compute_hamming_distance,
    hamming_distance, hamming_distance_into, hamming_distance_scalar, hamming_distance_x4,
    hamming_distance_x8, hamming_distance_x16,
};
