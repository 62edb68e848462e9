//! Loads the built `random` cdylib through the host loader and calls it.

#![cfg(feature = "host")]

use std::path::PathBuf;

use random::host::{HostConfig, RandomModule};
use random::rusty_api::{MersenneTwister, REPEATABLE_SEED};

/// The cdylib lands next to the test binary's `deps/` directory.
fn built_module_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let deps = exe.parent()?;
    let file = libloading::library_filename("random");
    [deps.to_path_buf(), deps.parent()?.to_path_buf()]
        .into_iter()
        .find(|dir| dir.join(&file).is_file())
}

#[test]
fn host_loads_module_and_reads_values() {
    let dir = built_module_dir().expect("random cdylib not found next to the test binary");
    let config = HostConfig {
        module_dir: Some(dir),
        ..HostConfig::default()
    };
    let module = RandomModule::load(&config).unwrap();

    let a = module.get_random();
    let b = module.get_random();
    assert!((0.0..1.0).contains(&a));
    assert!((0.0..1.0).contains(&b));
    assert_ne!(a.to_bits(), b.to_bits());

    module.seed_repeatable(REPEATABLE_SEED).unwrap();
    let mut reference = MersenneTwister::with_seed(REPEATABLE_SEED);
    for i in 0..5 {
        assert_eq!(
            module.get_random().to_bits(),
            reference.next().to_bits(),
            "value {} differs from the reference sequence",
            i
        );
    }

    let threads: Vec<_> = (0..4)
        .map(|_| {
            let module = &module;
            move || (0..1000).all(|_| (0.0..1.0).contains(&module.get_random()))
        })
        .collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = threads.into_iter().map(|t| s.spawn(t)).collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    });
}
