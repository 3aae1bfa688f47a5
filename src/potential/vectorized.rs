/*
Array-at-a-time variants. Both lean on ndarray broadcasting instead of
indexing single coordinates, trading memory for fewer interpreted steps:

- one_loop_pot keeps a loop over i and broadcasts row i against rows i+1..
- broadcast_matrix_pot builds the whole N x N squared-distance matrix and
  sums the strictly lower triangle, so it needs O(N^2) memory.
*/

use ndarray::{s, Array2, Axis};

use super::pair_term;
use crate::points::PointSet;

pub fn one_loop_pot(points: &PointSet, soft: f64) -> f64 {
    let r = points.positions();
    let n = points.len();
    let soft2 = soft * soft;
    let mut pot = 0.0;

    for i in 0..n.saturating_sub(1) {
        let rest = r.slice(s![i + 1.., ..]);
        let diff = &rest - &r.row(i);
        let dr2 = (&diff * &diff).sum_axis(Axis(1));
        pot += dr2.mapv(|d| pair_term(d, soft2)).sum();
    }

    pot
}

pub fn broadcast_matrix_pot(points: &PointSet, soft: f64) -> f64 {
    let r = points.positions();
    let n = points.len();
    let soft2 = soft * soft;

    // r2[[i, j]] = |r_j - r_i|^2, one axis at a time
    let mut r2 = Array2::<f64>::zeros((n, n));
    for k in 0..3 {
        let col = r.column(k);
        let mut d = &col.insert_axis(Axis(0)) - &col.insert_axis(Axis(1));
        d.mapv_inplace(|x| x * x);
        r2 += &d;
    }

    r2.mapv(|v| pair_term(v, soft2))
        .indexed_iter()
        .filter(|&((i, j), _)| j < i)
        .map(|(_, &v)| v)
        .sum()
}
