//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/attributes/content/data"),
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `ATTRSIM_DATA_DIR`
    /// - `ATTRSIM_SEED`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("ATTRSIM_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(seed) = read_env::<u64>("ATTRSIM_SEED") {
            config.seed = seed;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
