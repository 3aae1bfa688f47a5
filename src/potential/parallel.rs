use rayon::prelude::*;

use super::pair_term;
use crate::error::{BenchError, Result};
use crate::points::PointSet;

/// Pool the kernels run inside. Without a size the rayon global pool is
/// used; with one a private pool is built, so repeated runs in one process
/// never touch global state.
pub struct WorkerPool {
    pool: Option<rayon::ThreadPool>,
}

impl WorkerPool {
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Ok(Self { pool: None });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| BenchError::ThreadPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }

    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    pub fn threads(&self) -> usize {
        self.install(rayon::current_num_threads)
    }
}

pub fn parallel_pot(points: &PointSet, soft: f64) -> f64 {
    /*
    Rows are handed out to the pool one i at a time; row i owns the pairs
    (i, i+1..n) so no pair is counted twice and no state is shared. Early rows
    carry more pairs, work stealing evens that out.
     */
    let n = points.len();
    let soft2 = soft * soft;

    (0..n)
        .into_par_iter()
        .map(|i| {
            let r_i = points.vector(i);
            ((i + 1)..n)
                .map(|j| pair_term((points.vector(j) - r_i).norm_squared(), soft2))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::PointDistribution;
    use crate::potential::naive::two_loop_pot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parallel_matches_double_loop() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = PointSet::sample(300, PointDistribution::Uniform, &mut rng).unwrap();
        let expected = two_loop_pot(&points, 1e-2);
        let got = parallel_pot(&points, 1e-2);
        assert!(((got - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_private_pools_can_be_built_repeatedly() {
        let points = PointSet::from_rows(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        for _ in 0..3 {
            let pool = WorkerPool::new(2).unwrap();
            assert_eq!(pool.threads(), 2);
            let pot = pool.install(|| parallel_pot(&points, 0.0));
            assert!((pot - 2.5).abs() < 1e-12);
        }
        assert!(WorkerPool::new(0).unwrap().threads() >= 1);
    }
}
