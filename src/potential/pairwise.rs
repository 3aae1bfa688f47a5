/*
Library route: build the condensed pairwise-distance vector first (pairs in
(0,1), (0,2), .., (1,2), .. order, one entry per unordered pair), then reduce
it. Pair enumeration comes from itertools, the metric from nalgebra.
*/

use itertools::Itertools;
use nalgebra::distance;

use super::pair_term;
use crate::points::PointSet;

/// Euclidean distance for every unordered pair, condensed form.
pub fn pdist(points: &PointSet) -> Vec<f64> {
    (0..points.len())
        .tuple_combinations()
        .map(|(i, j)| distance(&points.point(i), &points.point(j)))
        .collect()
}

pub fn pdist_pot(points: &PointSet, soft: f64) -> f64 {
    let soft2 = soft * soft;
    pdist(points)
        .into_iter()
        .map(|d| pair_term(d * d, soft2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // position of pair (i, j), i < j, inside the condensed vector of n points
    fn condensed_index(n: usize, i: usize, j: usize) -> usize {
        n * i - i * (i + 1) / 2 + (j - i - 1)
    }

    #[test]
    fn test_pdist_length_and_order() {
        let points = PointSet::from_rows(&[
            [0.0, 0.0, 0.0],
            [3.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
            [0.0, 1.0, 0.0],
        ]);
        let d = pdist(&points);
        assert_eq!(d.len(), 6);
        assert!((d[condensed_index(4, 0, 1)] - 5.0).abs() < 1e-12);
        assert!((d[condensed_index(4, 0, 2)] - 2.0).abs() < 1e-12);
        assert!((d[condensed_index(4, 2, 3)] - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_condensed_index_is_dense() {
        let n = 6;
        let mut seen = vec![false; n * (n - 1) / 2];
        for i in 0..n {
            for j in (i + 1)..n {
                seen[condensed_index(n, i, j)] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_pdist_empty() {
        assert!(pdist(&PointSet::from_rows(&[[1.0, 1.0, 1.0]])).is_empty());
        assert_eq!(pdist_pot(&PointSet::from_rows(&[]), 0.1), 0.0);
    }
}
