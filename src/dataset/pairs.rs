use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, StandardNormal};
use tracing::{debug, warn};

use crate::errors::{HamError, Result};
use crate::numerics::{DistanceError, hamming_distance_scalar};

/// Parameters of a synthetic workload.
#[derive(Debug, Clone, Copy)]
pub struct PairParams {
    pub num_pairs: usize,
    pub dim: usize,
    /// Probability for each element of the right vector to differ from the left one.
    pub mismatch_rate: f64,
    pub seed: u64,
}

/// Equal-length vector pairs, `left[i]` is compared to `right[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPairs {
    dim: usize,
    left: Vec<Vec<f32>>,
    right: Vec<Vec<f32>>,
}

impl VectorPairs {
    /// Generates a deterministic workload.
    ///
    /// Left vectors hold small categorical values (rounded Gaussian samples). Right
    /// vectors are copies in which each element is replaced, with probability
    /// `mismatch_rate`, by a value guaranteed to be different.
    ///
    /// # Errors
    /// Returns [`HamError::InvalidParameter`] if `mismatch_rate` is not in `[0, 1]`.
    pub fn generate(params: PairParams) -> Result<Self> {
        let flip = Bernoulli::new(params.mismatch_rate).map_err(|_| {
            HamError::InvalidParameter(format!(
                "mismatch rate must be in [0, 1], got {}",
                params.mismatch_rate
            ))
        })?;
        let mut rng = StdRng::seed_from_u64(params.seed);

        let mut left = Vec::with_capacity(params.num_pairs);
        let mut right = Vec::with_capacity(params.num_pairs);
        for _ in 0..params.num_pairs {
            let base: Vec<f32> = (0..params.dim)
                .map(|_| rng.sample::<f32, _>(StandardNormal).round())
                .collect();
            let peer: Vec<f32> = base
                .iter()
                .map(|&x| {
                    if rng.sample(flip) {
                        x + rng.random_range(1..=3) as f32
                    } else {
                        x
                    }
                })
                .collect();
            left.push(base);
            right.push(peer);
        }

        debug!(
            pairs = params.num_pairs,
            dim = params.dim,
            seed = params.seed,
            "generated workload"
        );

        Ok(VectorPairs {
            dim: params.dim,
            left,
            right,
        })
    }

    /// Pairs consecutive rows: `(rows[0], rows[1])`, `(rows[2], rows[3])`, ...
    /// A trailing odd row is dropped.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != dim) {
            return Err(DistanceError::LengthMismatch {
                expected: dim,
                got: bad.len(),
            }
            .into());
        }
        if rows.len() % 2 == 1 {
            warn!(rows = rows.len(), "odd number of rows, dropping the last one");
        }

        let mut left = Vec::with_capacity(rows.len() / 2);
        let mut right = Vec::with_capacity(rows.len() / 2);
        let mut iter = rows.into_iter();
        while let (Some(l), Some(r)) = (iter.next(), iter.next()) {
            left.push(l);
            right.push(r);
        }

        Ok(VectorPairs { dim, left, right })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn pair(&self, index: usize) -> (&[f32], &[f32]) {
        (&self.left[index], &self.right[index])
    }

    /// Distances computed by the scalar reference, one per pair.
    pub fn expected_distances(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(l, r)| hamming_distance_scalar(l, r))
            .collect()
    }
}
