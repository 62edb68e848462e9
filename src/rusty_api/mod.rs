// Rust-native side of the random value source
pub mod constants_errors;
pub mod utils;
pub mod generator;

pub use constants_errors::*;
pub use generator::MersenneTwister;
