//! Module for the run configuration: where the fixtures go and how the random source is seeded.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Error;

pub const DEFAULT_OUTPUT_DIR: &str = "testdata";
pub const OUTPUT_DIR_ENV: &str = "FIXTURE_OUTPUT_DIR";
pub const SEED_ENV: &str = "FIXTURE_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    /// `None` draws a fresh seed from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment. The first command line argument, if any,
    /// overrides the output directory taken from `FIXTURE_OUTPUT_DIR`.
    pub fn from_env() -> Result<Self, Error> {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(OUTPUT_DIR_ENV).ok(),
            std::env::var(SEED_ENV).ok(),
        )
    }

    pub(crate) fn resolve(
        arg_dir: Option<String>,
        env_dir: Option<String>,
        env_seed: Option<String>,
    ) -> Result<Self, Error> {
        let output_dir = arg_dir
            .or(env_dir)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let seed = env_seed
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| Error::Config(format!("{SEED_ENV}={raw:?} is not a u64: {e}")))
            })
            .transpose()?;

        Ok(Self { output_dir, seed })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the random source shared by all factories of one run.
    pub fn rng(&self) -> Result<StdRng, Error> {
        match self.seed {
            Some(seed) => Ok(StdRng::seed_from_u64(seed)),
            None => StdRng::try_from_os_rng().map_err(|e| Error::Entropy(e.to_string())),
        }
    }
}
