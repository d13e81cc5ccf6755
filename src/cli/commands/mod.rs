//! Subcommand handlers

pub mod config;
pub mod course;
pub mod data;
pub mod enrollment;
pub mod report;
pub mod student;

use campus_records::config::Config;
use campus_records::engine::EnrollmentEngine;
use campus_records::error;
use campus_records::io::store;
use std::path::PathBuf;

/// The configured data directory as a path
pub(crate) fn data_dir(config: &Config) -> PathBuf {
    PathBuf::from(&config.paths.data_dir)
}

/// Load the engine from the data directory, exiting on unreadable data
pub(crate) fn load_engine(config: &Config) -> EnrollmentEngine {
    let dir = data_dir(config);
    match store::load_engine(&dir, config.limits.max_credits_per_semester) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to load records data from {}: {e}", dir.display());
            eprintln!("✗ Failed to load records data: {e}");
            std::process::exit(1);
        }
    }
}

/// Persist the engine back to the data directory, exiting on failure
pub(crate) fn save_engine(engine: &EnrollmentEngine, config: &Config) {
    let dir = data_dir(config);
    if let Err(e) = store::save_engine(engine, &dir) {
        error!("Failed to save records data to {}: {e}", dir.display());
        eprintln!("✗ Failed to save records data: {e}");
        std::process::exit(1);
    }
}
