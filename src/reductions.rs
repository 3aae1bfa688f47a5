/*
Sum of every coordinate in the point set. Timed next to the potential
variants as a floor: it touches the same memory once, so it shows how much
of a variant's time is just call and traversal overhead.

Both take the softening argument so they fit the timing harness; it is
ignored.
*/

use crate::points::PointSet;

pub fn coordinate_sum_loop(points: &PointSet, _soft: f64) -> f64 {
    let r = points.positions();
    let mut total = 0.0;
    for i in 0..points.len() {
        for k in 0..3 {
            total += r[[i, k]];
        }
    }
    total
}

pub fn coordinate_sum_ndarray(points: &PointSet, _soft: f64) -> f64 {
    points.positions().sum()
}

pub fn reductions() -> [(&'static str, fn(&PointSet, f64) -> f64); 2] {
    [
        ("coordinate_sum_loop", coordinate_sum_loop),
        ("coordinate_sum_ndarray", coordinate_sum_ndarray),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_agree() {
        let points = PointSet::from_rows(&[[1.0, 2.0, 3.0], [0.5, -0.5, 4.0]]);
        assert_eq!(coordinate_sum_loop(&points, 0.0), 10.0);
        assert_eq!(coordinate_sum_ndarray(&points, 0.0), 10.0);
        for (_, f) in reductions() {
            assert_eq!(f(&PointSet::from_rows(&[]), 0.0), 0.0);
        }
    }
}
