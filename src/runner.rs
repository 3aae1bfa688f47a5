/*
The trial loop

    for every N:
        generate the points once
        time every selected potential variant on them
        cross-check each result against the double-loop baseline
        time the coordinate-sum reductions
    optionally run the external comparison

Everything is sequential; the report goes to whatever writer the caller
passes in (stdout for the binary, a buffer in tests).
*/

use std::io::Write;

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{OutputFormat, RunConfig};
use crate::constants::REL_TOLERANCE;
use crate::error::Result;
use crate::external::{run_comparison, Comparison};
use crate::points::PointSet;
#[cfg(feature = "parallel")]
use crate::potential::parallel::WorkerPool;
use crate::potential::{all_variants, baseline, select_variants, BASELINE};
use crate::reductions::reductions;
use crate::timing::{time_func, Timing};
use crate::verify::cross_check;

#[derive(Debug)]
pub struct Trial {
    pub n: usize,
    pub reference: f64,
    pub timings: Vec<Timing>,
    pub reductions: Vec<Timing>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub seed: u64,
    pub trials: Vec<Trial>,
    pub mismatches: usize,
    pub comparison: Option<Comparison>,
}

fn emit<W: Write>(out: &mut W, format: OutputFormat, timing: &Timing) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{timing}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, timing).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// stands in for the rayon pool when the thread-pool variant is not built
#[cfg(not(feature = "parallel"))]
struct WorkerPool;

#[cfg(not(feature = "parallel"))]
impl WorkerPool {
    fn new(threads: usize) -> Result<Self> {
        if threads > 0 {
            warn!("threads={threads} ignored: built without the `parallel` feature");
        }
        Ok(WorkerPool)
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R,
    {
        op()
    }
}

pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    config.validate()?;
    let variants = select_variants(&config.variants)?;
    let pool = WorkerPool::new(config.threads)?;
    #[cfg(feature = "parallel")]
    info!("thread pool: {} threads", pool.threads());

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        "run started {} | seed={seed} softening={} distribution={:?} variants={}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        config.softening,
        config.distribution,
        variants.len()
    );

    let soft = config.softening;
    let text = config.format == OutputFormat::Text;
    let mut trials = Vec::with_capacity(config.sizes.len());
    let mut mismatches = 0;

    for &n in &config.sizes {
        if text {
            writeln!(out, "N= {n}")?;
        }
        let points = PointSet::sample(n, config.distribution, &mut rng)?;

        let mut timings = Vec::with_capacity(variants.len());
        for kernel in &variants {
            let timing = pool.install(|| time_func(kernel.name, kernel.func, &points, soft));
            emit(out, config.format, &timing)?;
            timings.push(timing);
        }

        let reference = match timings.iter().find(|t| t.name == BASELINE) {
            Some(t) => t.result,
            None => (baseline().func)(&points, soft),
        };
        for timing in &timings {
            if let Err(e) = cross_check(reference, timing, REL_TOLERANCE) {
                error!("N={n}: {e}");
                mismatches += 1;
                if config.strict {
                    return Err(e);
                }
            }
        }

        if text {
            writeln!(out)?;
        }
        let mut sums = Vec::with_capacity(2);
        for (name, f) in reductions() {
            let timing = time_func(name, f, &points, soft);
            emit(out, config.format, &timing)?;
            sums.push(timing);
        }
        if text {
            writeln!(out)?;
            writeln!(out)?;
        }
        out.flush()?;

        trials.push(Trial {
            n,
            reference,
            timings,
            reductions: sums,
        });
    }

    // the child writes to the same console
    out.flush()?;
    let comparison = config.compare_command.as_deref().map(run_comparison);

    if mismatches > 0 {
        warn!("{mismatches} result(s) disagreed with {BASELINE}");
    }
    info!("run finished, {} sizes", trials.len());

    Ok(RunSummary {
        seed,
        trials,
        mismatches,
        comparison,
    })
}

pub fn list_variants<W: Write>(out: &mut W) -> Result<()> {
    for variant in all_variants() {
        let status = match (variant.is_available(), variant.feature) {
            (true, _) => "available".to_string(),
            (false, Some(feature)) => format!("disabled (feature `{feature}`)"),
            (false, None) => "disabled".to_string(),
        };
        writeln!(out, "{:<22} {:<20} {status}", variant.name, variant.backend)?;
    }
    Ok(())
}
