//! Opens the `random` module and binds its exported symbols.
//!
//! A [`RandomModule`] is only ever handed out after the library opened, every
//! symbol resolved and `random_init` reported success.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use libc::{c_double, c_int, c_uint};
use libloading::Library;
use log::{debug, error, info};

use super::config::HostConfig;
use crate::rusty_api::constants_errors::RANDOM_SUCCESS;

pub const INIT_SYMBOL: &str = "random_init";
pub const GET_RANDOM_SYMBOL: &str = "get_random";
pub const SEED_REPEATABLE_SYMBOL: &str = "random_seed_repeatable";

type InitFn = unsafe extern "C" fn() -> c_int;
type GetRandomFn = unsafe extern "C" fn() -> c_double;
type SeedRepeatableFn = unsafe extern "C" fn(c_uint) -> c_int;

#[derive(Debug, thiserror::Error)]
pub enum ModuleLoadError {
    #[error("cannot open native module {path}: {source}", path = .path.display())]
    Open {
        path: PathBuf,
        source: libloading::Error,
    },
    #[error("native module does not export `{symbol}`: {source}")]
    Symbol {
        symbol: &'static str,
        source: libloading::Error,
    },
    #[error("native module failed to initialize (status {code})")]
    Initialization { code: i32 },
}

pub struct RandomModule {
    get_random: GetRandomFn,
    seed_repeatable: SeedRepeatableFn,
    path: PathBuf,
    // Owns the mapping the function pointers above point into
    _library: Library,
}

impl RandomModule {
    // MARK: load
    pub fn load(config: &HostConfig) -> Result<Self, ModuleLoadError> {
        Self::load_path(config.module_path())
    }

    // MARK: load_path
    pub fn load_path(path: impl Into<PathBuf>) -> Result<Self, ModuleLoadError> {
        let path = path.into();
        debug!("opening native module {}", path.display());

        // Opening runs the module's static initialisers
        let library = unsafe { Library::new(&path) }.map_err(|source| ModuleLoadError::Open {
            path: path.clone(),
            source,
        })?;

        let (init, get_random, seed_repeatable) = unsafe {
            (
                resolve::<InitFn>(&library, INIT_SYMBOL)?,
                resolve::<GetRandomFn>(&library, GET_RANDOM_SYMBOL)?,
                resolve::<SeedRepeatableFn>(&library, SEED_REPEATABLE_SYMBOL)?,
            )
        };

        unsafe { run_init(init)? };

        info!("native module {} loaded", path.display());
        Ok(Self {
            get_random,
            seed_repeatable,
            path,
            _library: library,
        })
    }

    // MARK: get_random
    /// Next value in `[0.0, 1.0)` from the module's generator.
    pub fn get_random(&self) -> f64 {
        unsafe { (self.get_random)() }
    }

    // MARK: seed_repeatable
    pub fn seed_repeatable(&self, seed: u32) -> Result<(), ModuleLoadError> {
        let code = unsafe { (self.seed_repeatable)(seed) };
        if code == RANDOM_SUCCESS {
            Ok(())
        } else {
            Err(ModuleLoadError::Initialization { code })
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for RandomModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomModule")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// MARK: resolve
/// Copies a function pointer out of `library`.
///
/// # Safety
/// `T` must match the exported symbol's real signature, and the pointer must
/// not be called after `library` is dropped.
unsafe fn resolve<T: Copy>(library: &Library, symbol: &'static str) -> Result<T, ModuleLoadError> {
    let sym = library
        .get::<T>(symbol.as_bytes())
        .map_err(|source| ModuleLoadError::Symbol { symbol, source })?;
    Ok(*sym)
}

// MARK: run_init
/// Calls the module's init hook; any status but success fails the load.
///
/// # Safety
/// `init` must point into a library that is still loaded.
unsafe fn run_init(init: InitFn) -> Result<(), ModuleLoadError> {
    let code = init();
    if code == RANDOM_SUCCESS {
        Ok(())
    } else {
        Err(ModuleLoadError::Initialization { code })
    }
}

static MODULE: OnceLock<Result<RandomModule, ModuleLoadError>> = OnceLock::new();

// MARK: load_once
/// Process-wide load. The first call decides the outcome; later calls return
/// the same module or the same error, whatever config they pass.
pub fn load_once(config: &HostConfig) -> Result<&'static RandomModule, &'static ModuleLoadError> {
    MODULE
        .get_or_init(|| {
            RandomModule::load(config).map_err(|e| {
                error!("{}", e);
                e
            })
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rusty_api::constants_errors::RANDOM_ERROR_INITIALIZATION;

    #[test]
    fn missing_module_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig {
            module_dir: Some(dir.path().to_path_buf()),
            ..HostConfig::default()
        };
        let err = RandomModule::load(&config).unwrap_err();
        match err {
            ModuleLoadError::Open { path, .. } => assert!(path.starts_with(dir.path())),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn corrupt_module_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(libloading::library_filename("random"));
        std::fs::write(&path, b"definitely not a shared object").unwrap();

        let err = RandomModule::load_path(&path).unwrap_err();
        assert!(matches!(err, ModuleLoadError::Open { .. }));
        assert!(err.to_string().contains("cannot open native module"));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn library_without_exports_fails_on_first_symbol() {
        let err = RandomModule::load_path("libm.so.6").unwrap_err();
        match err {
            ModuleLoadError::Symbol { symbol, .. } => assert_eq!(symbol, INIT_SYMBOL),
            other => panic!("unexpected error: {}", other),
        }
    }

    unsafe extern "C" fn init_fails() -> c_int {
        RANDOM_ERROR_INITIALIZATION
    }

    unsafe extern "C" fn init_succeeds() -> c_int {
        RANDOM_SUCCESS
    }

    #[test]
    fn failing_init_hook_fails_the_load() {
        let err = unsafe { run_init(init_fails) }.unwrap_err();
        assert!(matches!(
            err,
            ModuleLoadError::Initialization { code: RANDOM_ERROR_INITIALIZATION }
        ));
        assert!(unsafe { run_init(init_succeeds) }.is_ok());
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ModuleLoadError::Initialization { code: -1 };
        assert_eq!(err.to_string(), "native module failed to initialize (status -1)");
    }
}
