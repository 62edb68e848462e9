//! C ABI entry points exported from the `random` module.
//!
//! All symbols share one process-wide [`MersenneTwister`], seeded from OS
//! entropy on first use and serialised behind a mutex, so they may be called
//! from any thread. Hosts should call `random_init` once after loading the
//! module: it reports a generator that could not be seeded as a status code.
//! `get_random` has no error channel and aborts the process in that case.

use std::sync::OnceLock;

use libc::{c_double, c_int, c_uint};
use log::{debug, error};
use parking_lot::Mutex;

use crate::rusty_api::constants_errors::*;
use crate::rusty_api::generator::MersenneTwister;

static GENERATOR: OnceLock<Result<Mutex<MersenneTwister>, RandomError>> = OnceLock::new();

// MARK: global_generator
fn global_generator() -> Result<&'static Mutex<MersenneTwister>, &'static RandomError> {
    GENERATOR
        .get_or_init(|| match MersenneTwister::from_entropy() {
            Ok(mt) => {
                debug!("random generator seeded from OS entropy");
                Ok(Mutex::new(mt))
            }
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        })
        .as_ref()
}

// MARK: draw
fn draw<T>(f: impl FnOnce(&mut MersenneTwister) -> T) -> T {
    match global_generator() {
        Ok(generator) => f(&mut *generator.lock()),
        Err(_) => std::process::abort(),
    }
}

// MARK: random_init
#[no_mangle]
pub extern "C" fn random_init() -> c_int {
    match global_generator() {
        Ok(_) => RANDOM_SUCCESS,
        Err(e) => e.status_code(),
    }
}

// MARK: get_random
#[no_mangle]
pub extern "C" fn get_random() -> c_double {
    draw(|mt| mt.next())
}

// MARK: random_seed_repeatable
#[no_mangle]
pub extern "C" fn random_seed_repeatable(seed: c_uint) -> c_int {
    match global_generator() {
        Ok(generator) => {
            generator.lock().reseed(seed);
            debug!("random generator reseeded with {}", seed);
            RANDOM_SUCCESS
        }
        Err(e) => e.status_code(),
    }
}

// MARK: get_random_uniform
#[no_mangle]
pub extern "C" fn get_random_uniform(lo: c_double, hi: c_double) -> c_double {
    draw(|mt| mt.uniform(lo, hi))
}

// MARK: get_random_normal
#[no_mangle]
pub extern "C" fn get_random_normal(mean: c_double, stdev: c_double) -> c_double {
    draw(|mt| mt.normal(mean, stdev))
}

// MARK: get_random_uint
/// Returns `0` when `bound` is `0`.
#[no_mangle]
pub extern "C" fn get_random_uint(bound: c_uint) -> c_uint {
    draw(|mt| mt.next_below(bound).unwrap_or(0))
}
