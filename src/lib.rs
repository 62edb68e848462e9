//! Native random value source.
//!
//! The crate builds as a `cdylib` named `random` exporting `double
//! get_random(void)` and a few companion symbols (see [`c_ffi`]), and as an
//! `rlib` carrying the Rust-native generator ([`rusty_api`]) and, with the
//! `host` feature, the loader a host process uses to open the module and
//! call it ([`host`]).

pub mod rusty_api;
pub mod c_ffi;

#[cfg(feature = "host")]
pub mod host;

pub use rusty_api::*;
pub use c_ffi::*;
