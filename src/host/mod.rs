//! Host side of the module boundary: configuration, loading and logging for
//! a process that opens the `random` module at runtime.

pub mod config;
pub mod loader;
pub mod logging;

pub use config::HostConfig;
pub use loader::{load_once, ModuleLoadError, RandomModule};
