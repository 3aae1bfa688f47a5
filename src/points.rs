/*
Point sets

A trial works on N points in three dimensions, stored row-major in an
(N, 3) ndarray. The set is generated once per trial and only ever read by
the potential variants, so every accessor hands out views or copies.
*/

use nalgebra::{Point3, Vector3};
use ndarray::{Array2, ArrayView2, Axis};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SIGMA;
use crate::error::{BenchError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointDistribution {
    // every coordinate uniform on [0, 1)
    #[default]
    Uniform,
    // every coordinate normal around 0.5
    Gaussian { sigma: f64 },
}

impl PointDistribution {
    pub fn gaussian() -> Self {
        PointDistribution::Gaussian {
            sigma: DEFAULT_SIGMA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    positions: Array2<f64>,
}

impl PointSet {
    pub fn from_rows(rows: &[[f64; 3]]) -> Self {
        let positions = Array2::from_shape_fn((rows.len(), 3), |(i, k)| rows[i][k]);
        Self { positions }
    }

    pub fn sample<R: Rng + ?Sized>(
        n: usize,
        distribution: PointDistribution,
        rng: &mut R,
    ) -> Result<Self> {
        /*
        Draw n points from the requested distribution. The uniform cube matches
        the usual benchmark input; the gaussian cloud packs points closer
        together so the softening term actually matters.
         */
        let positions = match distribution {
            PointDistribution::Uniform => {
                let uniform =
                    Uniform::new(0.0, 1.0).map_err(|e| BenchError::Sampling(e.to_string()))?;
                Array2::from_shape_simple_fn((n, 3), || uniform.sample(&mut *rng))
            }
            PointDistribution::Gaussian { sigma } => {
                if !sigma.is_finite() || sigma <= 0.0 {
                    return Err(BenchError::InvalidSigma(sigma));
                }
                let normal =
                    Normal::new(0.5, sigma).map_err(|e| BenchError::Sampling(e.to_string()))?;
                Array2::from_shape_simple_fn((n, 3), || normal.sample(&mut *rng))
            }
        };
        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn positions(&self) -> ArrayView2<'_, f64> {
        self.positions.view()
    }

    pub fn vector(&self, i: usize) -> Vector3<f64> {
        let r = self.positions.row(i);
        Vector3::new(r[0], r[1], r[2])
    }

    pub fn point(&self, i: usize) -> Point3<f64> {
        Point3::from(self.vector(i))
    }

    /// Structure-of-arrays copy: one contiguous vector per axis.
    pub fn columns(&self) -> [Vec<f64>; 3] {
        [0, 1, 2].map(|k| self.positions.column(k).to_vec())
    }

    /// Same points, visited in the given order.
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self {
            positions: self.positions.select(Axis(0), order),
        }
    }
}
