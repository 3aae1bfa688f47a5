/*
Four-lane SIMD variant (f64x4 from `wide`). The points are copied into one
contiguous vector per axis so that every inner step loads four partners of
point i at once; the tail that does not fill a full register is summed with
plain scalar code.
*/

use wide::f64x4;

use super::pair_term;
use crate::points::PointSet;

const LANES: usize = 4;

#[inline(always)]
fn load(chunk: &[f64]) -> f64x4 {
    f64x4::from([chunk[0], chunk[1], chunk[2], chunk[3]])
}

pub fn simd_pot(points: &PointSet, soft: f64) -> f64 {
    let [xs, ys, zs] = points.columns();
    let n = xs.len();
    let soft2 = soft * soft;
    let soft2_v = f64x4::splat(soft2);
    let one = f64x4::splat(1.0);
    let mut pot = 0.0;

    for i in 0..n.saturating_sub(1) {
        let (xi, yi, zi) = (
            f64x4::splat(xs[i]),
            f64x4::splat(ys[i]),
            f64x4::splat(zs[i]),
        );
        let start = i + 1;
        let bx = xs[start..].chunks_exact(LANES);
        let by = ys[start..].chunks_exact(LANES);
        let bz = zs[start..].chunks_exact(LANES);
        let tail = start + bx.len() * LANES;

        let mut acc = f64x4::splat(0.0);
        for ((cx, cy), cz) in bx.zip(by).zip(bz) {
            let dx = load(cx) - xi;
            let dy = load(cy) - yi;
            let dz = load(cz) - zi;
            let r2 = dx * dx + dy * dy + dz * dz + soft2_v;
            acc += one / r2.sqrt();
        }
        pot += acc.to_array().iter().sum::<f64>();

        for j in tail..n {
            let dx = xs[j] - xs[i];
            let dy = ys[j] - ys[i];
            let dz = zs[j] - zs[i];
            pot += pair_term(dx * dx + dy * dy + dz * dz, soft2);
        }
    }

    pot
}
