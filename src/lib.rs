/*

=========================================================
 Softened Pairwise Potential Benchmarks (Rust)
=========================================================

🔧 The Kernel
-------------
For N point masses r_1 .. r_N the softened pairwise potential is

    U = sum_{i<j} 1 / sqrt(|r_i - r_j|^2 + eps^2)

- eps is the softening length, it keeps coincident points finite.
- Every unordered pair is counted once, so N = 0 or N = 1 gives U = 0.
- The sum does not depend on the order of the points.

📦 Variants
-----------
- two_loop_pot          index double loop with nalgebra vectors (baseline)
- component_loop_pot    triple loop, coordinates by hand
- one_loop_pot          row i broadcast against rows i+1.. (ndarray)
- broadcast_matrix_pot  full N x N distance matrix, lower triangle summed
- pdist_pot             condensed pairwise-distance vector, then reduced
- simd_pot              f64x4 lanes              (feature `simd`)
- parallel_pot          rayon over the outer loop (feature `parallel`)

⏱️ Harness
----------
Random points are generated once per size and fed to every variant in
turn. Each call is timed and printed as

    <name> Result=<value> Time=<seconds>

and checked against the baseline to a relative error of 1e-9.

=========================================================

*/

pub mod config;
pub mod constants;
pub mod error;
pub mod external;
pub mod points;
pub mod potential;
pub mod reductions;
pub mod runner;
pub mod timing;
pub mod verify;

pub use config::{OutputFormat, RunConfig};
pub use error::{BenchError, Result};
pub use points::{PointDistribution, PointSet};
pub use potential::{all_variants, baseline, select_variants, Kernel, Variant};
pub use runner::{list_variants, run, RunSummary};
pub use timing::{time_func, Timing};
