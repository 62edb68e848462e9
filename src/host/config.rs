use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_MODULE_NAME: &str = "random";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where to find the module and what to ask of it.
///
/// Command line flags win over environment variables, which win over the
/// defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "random-host", version, about = "Load the random module and print values from it")]
pub struct HostConfig {
    /// Logical module name, without platform prefix or extension
    #[arg(long, env = "RANDOM_MODULE", default_value = DEFAULT_MODULE_NAME)]
    pub module: String,

    /// Directory containing the module (platform search path when unset)
    #[arg(long, env = "RANDOM_MODULE_DIR")]
    pub module_dir: Option<PathBuf>,

    /// Switch the module to a repeatable sequence (`--seed` alone uses 42)
    #[arg(long, env = "RANDOM_SEED", num_args = 0..=1, default_missing_value = "42")]
    pub seed: Option<u32>,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "RANDOM_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl HostConfig {
    // MARK: module_path
    /// Platform file name for the module, joined onto `module_dir` if set.
    pub fn module_path(&self) -> PathBuf {
        let file = libloading::library_filename(&self.module);
        match &self.module_dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE_NAME.to_string(),
            module_dir: None,
            seed: None,
            count: 1,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
