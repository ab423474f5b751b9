//! Deployment precondition check for Edrak Analytics.
//!
//! [`gate::check`] is a pure function of a required-key list and an
//! [`edrak_core::env::EnvSnapshot`]; `main` owns printing and the exit code.

pub mod gate;
pub mod reporter;
