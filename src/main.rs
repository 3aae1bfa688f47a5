//! ----------------------
//! softpot benchmark driver
//! ----------------------
//!
//! Times every compiled-in potential variant on random point sets.
//! `RUST_LOG=info` shows the run banner, `debug` every single timing.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::warn;
use softpot::{list_variants, run, OutputFormat, PointDistribution, Result, RunConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DistributionArg {
    Uniform,
    Gaussian,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of points per trial, one trial per value.
    #[arg(short = 'n', long, num_args = 1..)]
    sizes: Option<Vec<usize>>,

    /// Softening length added in quadrature to every distance.
    #[arg(short, long)]
    softening: Option<f64>,

    /// Seed for the point generator (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Only run these variants, in this order.
    #[arg(long, num_args = 1..)]
    variants: Option<Vec<String>>,

    /// How the points are sampled.
    #[arg(long, value_enum)]
    distribution: Option<DistributionArg>,

    /// Spread of the gaussian point cloud.
    #[arg(long)]
    sigma: Option<f64>,

    /// Shell command run afterwards for a cross-language comparison.
    #[arg(long)]
    compare_cmd: Option<String>,

    /// Stop at the first result that disagrees with the baseline.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Worker threads for the parallel variant (0 = rayon default).
    #[arg(long)]
    threads: Option<usize>,

    /// Report format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON config file, command-line flags win over it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the variant registry and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(softening) = self.softening {
            config.softening = softening;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(variants) = self.variants {
            config.variants = variants;
        }
        // a bare --sigma asks for the gaussian cloud
        match (self.distribution, self.sigma) {
            (Some(DistributionArg::Uniform), sigma) => {
                if let Some(sigma) = sigma {
                    warn!("--sigma {sigma} ignored for the uniform distribution");
                }
                config.distribution = PointDistribution::Uniform;
            }
            (Some(DistributionArg::Gaussian) | None, Some(sigma)) => {
                config.distribution = PointDistribution::Gaussian { sigma }
            }
            (Some(DistributionArg::Gaussian), None) => {
                if !matches!(config.distribution, PointDistribution::Gaussian { .. }) {
                    config.distribution = PointDistribution::gaussian();
                }
            }
            (None, None) => {}
        }
        if self.compare_cmd.is_some() {
            config.compare_command = self.compare_cmd;
        }
        config.strict |= self.strict;
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let outcome = if args.list {
        list_variants(&mut io::stdout().lock())
    } else {
        args.into_config()
            .and_then(|config| run(&config, &mut io::stdout().lock()).map(|_| ()))
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
