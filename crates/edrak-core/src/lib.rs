//! Shared building blocks for Edrak deployment tooling.
//!
//! Holds the environment snapshot, the configuration error taxonomy and
//! tracing setup. Binaries read the process environment once at startup and
//! pass an [`env::EnvSnapshot`] down; library code never touches `std::env`.

pub mod env;
pub mod error;
pub mod tracing;
