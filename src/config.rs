/*
Run configuration

Built in three layers: the defaults below, then an optional JSON file, then
whatever the command line sets explicitly. `validate` runs once on the
merged result before any points are generated.

    {
        "sizes": [1000, 2000],
        "softening": 0.01,
        "seed": 42,
        "variants": ["two_loop_pot", "one_loop_pot"],
        "distribution": { "kind": "gaussian", "sigma": 0.1 },
        "compare_command": "python3 tests.py",
        "strict": true
    }
*/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SIZES, DEFAULT_SOFTENING};
use crate::error::{BenchError, Result};
use crate::points::PointDistribution;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub sizes: Vec<usize>,
    pub softening: f64,
    pub seed: Option<u64>,
    // empty means every compiled-in variant
    pub variants: Vec<String>,
    pub distribution: PointDistribution,
    pub compare_command: Option<String>,
    pub strict: bool,
    // 0 leaves the rayon default
    pub threads: usize,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            softening: DEFAULT_SOFTENING,
            seed: None,
            variants: Vec::new(),
            distribution: PointDistribution::default(),
            compare_command: None,
            strict: false,
            threads: 0,
            format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| BenchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptySizes);
        }
        if !self.softening.is_finite() || self.softening < 0.0 {
            return Err(BenchError::InvalidSoftening(self.softening));
        }
        if let PointDistribution::Gaussian { sigma } = self.distribution {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(BenchError::InvalidSigma(sigma));
            }
        }
        Ok(())
    }
}
