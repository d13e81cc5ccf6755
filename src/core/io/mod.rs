//! Import/export, persistence, and backup collaborators
//!
//! All filesystem access for records data lives here; the registry and
//! engine stay purely in-memory.

pub mod backup;
pub mod csv;
pub mod store;

pub use backup::{backup_size, create_backup, list_backup_files, BackupFile};
pub use store::{load_engine, save_engine};
