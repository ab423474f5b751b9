//! Typed settings for the Edrak Analytics BI application.
//!
//! [`Settings::from_snapshot`] builds the full configuration from an
//! [`edrak_core::env::EnvSnapshot`]; serializing it yields the upper-case
//! keys the application reads at startup.

pub mod branding;
pub mod cache;
pub mod features;
pub mod secret;
pub mod security;
pub mod settings;

pub use settings::Settings;
