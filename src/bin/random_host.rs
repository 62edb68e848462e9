//! Minimal host for the `random` module.
//!
//! Loads the module once at startup, optionally switches it to a repeatable
//! sequence, then prints each value it returns as text.
//!
//! ```bash
//! RANDOM_MODULE_DIR=target/release random-host -n 3
//! random-host --module-dir target/release --seed
//! ```

use std::process::ExitCode;

use clap::Parser;
use log::error;

use random::host::logging::init_logging;
use random::host::{load_once, HostConfig};

fn main() -> ExitCode {
    let config = HostConfig::parse();
    init_logging(&config.log_level);

    let module = match load_once(&config) {
        Ok(module) => module,
        Err(e) => {
            eprintln!("random module unavailable: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(seed) = config.seed {
        if let Err(e) = module.seed_repeatable(seed) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    for _ in 0..config.count {
        println!("{}", module.get_random());
    }
    ExitCode::SUCCESS
}
