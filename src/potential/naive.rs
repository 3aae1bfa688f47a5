use super::pair_term;
use crate::points::PointSet;

pub fn two_loop_pot(points: &PointSet, soft: f64) -> f64 {
    /*
    Double loop over all distinct pairs, the same walk as a site-site energy
    sum: take the difference vector, square its length, add the softening.
     */
    let n = points.len();
    let soft2 = soft * soft;
    let mut pot = 0.0;

    for i in 0..n {
        let r_i = points.vector(i);
        for j in (i + 1)..n {
            let r_ij = points.vector(j) - r_i;
            pot += pair_term(r_ij.norm_squared(), soft2);
        }
    }

    pot
}

// same pair walk with the coordinate loop spelled out
pub fn component_loop_pot(points: &PointSet, soft: f64) -> f64 {
    let r = points.positions();
    let n = points.len();
    let soft2 = soft * soft;
    let mut pot = 0.0;

    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            let mut dr = 0.0;
            for k in 0..3 {
                let d = r[[i, k]] - r[[j, k]];
                dr += d * d;
            }
            pot += 1.0 / (dr + soft2).sqrt();
        }
    }

    pot
}
