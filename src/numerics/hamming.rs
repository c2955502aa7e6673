use std::simd::prelude::*;

use serde::Serialize;

use crate::errors::HamError;

/// Number of f32 lanes in the base (narrow) register of the default kernel.
pub const SIMD_LANECOUNT: usize = 4;

/// Number of independent accumulators, i.e. narrow groups per wide block.
pub const UNROLL: usize = 4;

/// Smallest length the vectorized kernel is meant to be called with: one full wide block
/// of the default kernel.
pub const MIN_VECTORIZED_LEN: usize = SIMD_LANECOUNT * UNROLL;

/// Generates a Hamming kernel for a fixed base lane width.
///
/// Every kernel computes `length - count(i : a[i] == b[i])` with the same decomposition:
///
/// ```text
/// [0, L)      L = length - length % LANES      vectorized, counts equal lanes
///   wide blocks of UNROLL * LANES              4 accumulators, one per group
///   narrow blocks of LANES                     accumulator 0
/// [L, length)                                  scalar, decrements the running total
/// ```
///
/// Lane-wise `simd_eq` yields a mask whose integer form is `-1` where equal and `0`
/// otherwise. Subtracting it from the accumulator is a branchless increment.
macro_rules! hamming_kernel {
    ($(#[$meta:meta])* $name:ident, $lanes:literal) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(a: &[f32], b: &[f32], length: usize) -> f32 {
            type FloatLanes = Simd<f32, $lanes>;
            type CountLanes = Simd<i32, $lanes>;
            const WIDE: usize = $lanes * UNROLL;

            debug_assert!(
                length >= MIN_VECTORIZED_LEN,
                "hamming kernel requires at least {MIN_VECTORIZED_LEN} elements, got {length}"
            );

            let a = &a[..length];
            let b = &b[..length];

            let vectorized = length - length % $lanes;

            let mut acc0 = CountLanes::splat(0);
            let mut acc1 = CountLanes::splat(0);
            let mut acc2 = CountLanes::splat(0);
            let mut acc3 = CountLanes::splat(0);

            let (wide_a, _) = a[..vectorized].as_chunks::<WIDE>();
            let (wide_b, _) = b[..vectorized].as_chunks::<WIDE>();

            for (block_a, block_b) in wide_a.iter().zip(wide_b) {
                let (groups_a, _) = block_a.as_chunks::<$lanes>();
                let (groups_b, _) = block_b.as_chunks::<$lanes>();

                acc0 -= FloatLanes::from_array(groups_a[0])
                    .simd_eq(FloatLanes::from_array(groups_b[0]))
                    .to_simd();
                acc1 -= FloatLanes::from_array(groups_a[1])
                    .simd_eq(FloatLanes::from_array(groups_b[1]))
                    .to_simd();
                acc2 -= FloatLanes::from_array(groups_a[2])
                    .simd_eq(FloatLanes::from_array(groups_b[2]))
                    .to_simd();
                acc3 -= FloatLanes::from_array(groups_a[3])
                    .simd_eq(FloatLanes::from_array(groups_b[3]))
                    .to_simd();
            }

            let narrow_start = wide_a.len() * WIDE;
            let (narrow_a, _) = a[narrow_start..vectorized].as_chunks::<$lanes>();
            let (narrow_b, _) = b[narrow_start..vectorized].as_chunks::<$lanes>();

            for (&group_a, &group_b) in narrow_a.iter().zip(narrow_b) {
                acc0 -= FloatLanes::from_array(group_a)
                    .simd_eq(FloatLanes::from_array(group_b))
                    .to_simd();
            }

            // lanes only ever count up from zero, the reductions are never negative
            let vector_equal: usize = [acc0, acc1, acc2, acc3]
                .iter()
                .map(|acc| acc.reduce_sum() as usize)
                .sum();

            let mut differing = length - vector_equal;

            for (x, y) in a[vectorized..].iter().zip(&b[vectorized..]) {
                if x == y {
                    differing -= 1;
                }
            }

            differing as f32
        }
    };
}

hamming_kernel!(
    /// Hamming kernel on 4-wide registers (128 bit), 16 elements per wide block.
    ///
    /// # Preconditions
    ///
    /// `length >= MIN_VECTORIZED_LEN`, and both `a` and `b` hold at least `length`
    /// elements. Only the first is checked, and only in debug builds. Short buffers
    /// panic on slicing.
    hamming_distance_x4,
    4
);

hamming_kernel!(
    /// Same as [`hamming_distance_x4`] on 8-wide registers (256 bit), 32 elements per
    /// wide block.
    hamming_distance_x8,
    8
);

hamming_kernel!(
    /// Same as [`hamming_distance_x4`] on 16-wide registers (512 bit), 64 elements per
    /// wide block.
    hamming_distance_x16,
    16
);

/// # Usage
/// Computes the Hamming distance over the first `length` elements of `a` and `b`:
///
/// ```text
/// H(a, b) = |{ i < length : a[i] != b[i] }|
/// ```
///
/// Equality is IEEE equality: `NaN` never matches anything, `-0.0` matches `0.0`.
/// The count is returned as an `f32`, exact for any realistic vector length.
///
/// # Preconditions
///
/// `length >= MIN_VECTORIZED_LEN` (16) and both buffers hold `length` elements.
/// Callers with shorter vectors should go through
/// [`HammingProvider`](crate::numerics::HammingProvider), which picks the scalar path.
#[inline]
pub fn compute_hamming_distance(a: &[f32], b: &[f32], length: usize) -> f32 {
    hamming_distance_x4(a, b, length)
}

/// Hamming distance over the whole of `a`. `b` must be at least as long.
#[inline]
pub fn hamming_distance(a: &[f32], b: &[f32]) -> f32 {
    compute_hamming_distance(a, b, a.len())
}

/// Writes the Hamming distance of `a` and `b` into `out`. The slot is written once,
/// after the whole computation.
#[inline]
pub fn hamming_distance_into(a: &[f32], b: &[f32], out: &mut f32) {
    *out = hamming_distance(a, b);
}

/// Element-wise reference implementation, valid for any length.
pub fn hamming_distance_scalar(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).filter(|(x, y)| x != y).count() as f32
}

/// Base register width a kernel runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaneWidth {
    X4,
    X8,
    X16,
}

impl LaneWidth {
    pub fn lanes(self) -> usize {
        match self {
            LaneWidth::X4 => 4,
            LaneWidth::X8 => 8,
            LaneWidth::X16 => 16,
        }
    }

    /// Runs the kernel of this width on the first `length` elements.
    #[inline]
    pub fn distance(self, a: &[f32], b: &[f32], length: usize) -> f32 {
        match self {
            LaneWidth::X4 => hamming_distance_x4(a, b, length),
            LaneWidth::X8 => hamming_distance_x8(a, b, length),
            LaneWidth::X16 => hamming_distance_x16(a, b, length),
        }
    }
}

impl TryFrom<usize> for LaneWidth {
    type Error = HamError;

    fn try_from(lanes: usize) -> Result<Self, Self::Error> {
        match lanes {
            4 => Ok(LaneWidth::X4),
            8 => Ok(LaneWidth::X8),
            16 => Ok(LaneWidth::X16),
            other => Err(HamError::LaneWidth(other)),
        }
    }
}
