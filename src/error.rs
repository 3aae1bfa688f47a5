/*
Errors raised while configuring or running a benchmark.

Optional variants that are not compiled in are not errors, they are skipped
with a warning by the registry. Everything here ends the run.
*/

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("softening must be finite and non-negative, got {0}")]
    InvalidSoftening(f64),
    #[error("gaussian sigma must be finite and positive, got {0}")]
    InvalidSigma(f64),
    #[error("no point counts given")]
    EmptySizes,
    #[error("unknown variant `{0}` (try --list)")]
    UnknownVariant(String),
    #[error("no potential variants left to run")]
    NoVariants,
    #[error("unable to build sampling distribution: {0}")]
    Sampling(String),
    #[error("unable to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{name} returned {got}, baseline is {expected} (relative error {rel_err:e})")]
    Mismatch {
        name: String,
        expected: f64,
        got: f64,
        rel_err: f64,
    },
    #[error("unable to write report: {0}")]
    Report(#[from] std::io::Error),
    #[error("unable to build thread pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
