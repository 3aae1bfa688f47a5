/*
Softened pairwise potential

    U = sum_{i<j} 1 / sqrt(|r_i - r_j|^2 + soft^2)

Every variant below computes the same number; they only differ in how the
pairs are walked (index loops, array broadcasting, condensed distance
vectors, SIMD lanes, a thread pool). Fewer than two points gives 0.
*/

pub mod naive;
pub mod pairwise;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "simd")]
pub mod simd;
pub mod vectorized;

use log::warn;
use num::Float;

use crate::error::{BenchError, Result};
use crate::points::PointSet;

pub type PotentialFn = fn(&PointSet, f64) -> f64;

pub const BASELINE: &str = "two_loop_pot";

/// One pair's contribution, given the squared distance and squared softening.
#[inline(always)]
pub fn pair_term<T: Float>(r2: T, soft2: T) -> T {
    (r2 + soft2).sqrt().recip()
}

/// A compiled-in implementation, ready to call.
#[derive(Clone, Copy, Debug)]
pub struct Kernel {
    pub name: &'static str,
    pub func: PotentialFn,
}

/// The reference every other result is checked against.
pub fn baseline() -> Kernel {
    Kernel {
        name: BASELINE,
        func: naive::two_loop_pot,
    }
}

/// Registry entry; `func` is absent when its cargo feature is off.
#[derive(Clone, Copy, Debug)]
pub struct Variant {
    pub name: &'static str,
    pub backend: &'static str,
    pub feature: Option<&'static str>,
    func: Option<PotentialFn>,
}

impl Variant {
    pub fn kernel(&self) -> Option<Kernel> {
        self.func.map(|func| Kernel {
            name: self.name,
            func,
        })
    }

    pub fn is_available(&self) -> bool {
        self.func.is_some()
    }
}

pub fn all_variants() -> Vec<Variant> {
    vec![
        Variant {
            name: BASELINE,
            backend: "nalgebra",
            feature: None,
            func: Some(baseline().func),
        },
        Variant {
            name: "component_loop_pot",
            backend: "scalar",
            feature: None,
            func: Some(naive::component_loop_pot),
        },
        Variant {
            name: "one_loop_pot",
            backend: "ndarray",
            feature: None,
            func: Some(vectorized::one_loop_pot),
        },
        Variant {
            name: "broadcast_matrix_pot",
            backend: "ndarray",
            feature: None,
            func: Some(vectorized::broadcast_matrix_pot),
        },
        Variant {
            name: "pdist_pot",
            backend: "itertools+nalgebra",
            feature: None,
            func: Some(pairwise::pdist_pot),
        },
        Variant {
            name: "simd_pot",
            backend: "wide",
            feature: Some("simd"),
            #[cfg(feature = "simd")]
            func: Some(simd::simd_pot),
            #[cfg(not(feature = "simd"))]
            func: None,
        },
        Variant {
            name: "parallel_pot",
            backend: "rayon",
            feature: Some("parallel"),
            #[cfg(feature = "parallel")]
            func: Some(parallel::parallel_pot),
            #[cfg(not(feature = "parallel"))]
            func: None,
        },
    ]
}

pub fn find_variant(name: &str) -> Option<Variant> {
    all_variants().into_iter().find(|v| v.name == name)
}

pub fn select_variants(filter: &[String]) -> Result<Vec<Kernel>> {
    /*
    Resolve the requested names against the registry. An empty filter means
    everything that was compiled in. Names that exist but whose feature is off
    are dropped with a warning, unknown names are an error.
     */
    let requested: Vec<Variant> = if filter.is_empty() {
        all_variants()
    } else {
        filter
            .iter()
            .map(|name| find_variant(name).ok_or_else(|| BenchError::UnknownVariant(name.clone())))
            .collect::<Result<_>>()?
    };

    let mut selected = Vec::with_capacity(requested.len());
    for variant in requested {
        match variant.kernel() {
            Some(kernel) => selected.push(kernel),
            None => warn!(
                "skipping {}: built without the `{}` feature",
                variant.name,
                variant.feature.unwrap_or("?")
            ),
        }
    }

    if selected.is_empty() {
        return Err(BenchError::NoVariants);
    }
    Ok(selected)
}
