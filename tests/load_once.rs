//! Process-wide load guard. One test per file: the guard is a global.

#![cfg(feature = "host")]

use random::host::{load_once, HostConfig, ModuleLoadError};

#[test]
fn failed_load_is_reported_once_and_cached() {
    let dir = tempfile::tempdir().unwrap();
    let missing = HostConfig {
        module_dir: Some(dir.path().to_path_buf()),
        ..HostConfig::default()
    };

    let first = load_once(&missing).unwrap_err();
    assert!(matches!(first, ModuleLoadError::Open { .. }));

    // A later attempt with a different config sees the same outcome
    let second = load_once(&HostConfig::default()).unwrap_err();
    assert!(std::ptr::eq(first, second));
}
