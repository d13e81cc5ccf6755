//! Core module: domain models, registries, and the enrollment engine

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod registry;
pub mod reports;

/// Returns the current version of the `campus-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
