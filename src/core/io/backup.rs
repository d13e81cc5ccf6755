//! Backup utilities for the data directory
//!
//! A backup is a timestamped directory under the configured backup root
//! containing a full CSV export. The size and listing helpers walk the
//! backup tree recursively.

use crate::core::engine::EnrollmentEngine;
use crate::core::error::RecordsError;
use crate::core::io::store;
use std::fs;
use std::path::{Path, PathBuf};

/// A regular file found under the backup root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// Path relative to the backup root
    pub relative_path: PathBuf,
    /// Directory depth below the backup root (files directly inside a
    /// backup directory are at depth 2)
    pub depth: usize,
    /// File size in bytes
    pub size: u64,
}

/// Export the engine's state into a new timestamped directory under
/// `backup_root`, returning the created path.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the directory or the exports cannot
/// be written.
pub fn create_backup(
    engine: &EnrollmentEngine,
    backup_root: &Path,
) -> Result<PathBuf, RecordsError> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let backup_dir = backup_root.join(format!("backup_{timestamp}"));

    fs::create_dir_all(&backup_dir)?;
    store::save_engine(engine, &backup_dir)?;

    crate::info!("Backup created at: {}", backup_dir.display());
    Ok(backup_dir)
}

/// Total size in bytes of every regular file under `backup_root`.
///
/// A missing root counts as zero bytes, matching "no backups yet".
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when a directory cannot be read.
pub fn backup_size(backup_root: &Path) -> Result<u64, RecordsError> {
    if !backup_root.exists() {
        return Ok(0);
    }
    let mut total = 0;
    walk(backup_root, backup_root, usize::MAX, &mut |_, _, size| {
        total += size;
    })?;
    Ok(total)
}

/// List regular files under `backup_root` up to `max_depth` directory
/// levels, sorted by relative path.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when a directory cannot be read.
pub fn list_backup_files(
    backup_root: &Path,
    max_depth: usize,
) -> Result<Vec<BackupFile>, RecordsError> {
    if !backup_root.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    walk(backup_root, backup_root, max_depth, &mut |path, depth, size| {
        files.push(BackupFile {
            relative_path: path.to_path_buf(),
            depth,
            size,
        });
    })?;
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

fn walk(
    root: &Path,
    dir: &Path,
    max_depth: usize,
    visit: &mut impl FnMut(&Path, usize, u64),
) -> Result<(), RecordsError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let depth = relative.components().count();

        if metadata.is_dir() {
            if depth < max_depth {
                walk(root, &path, max_depth, visit)?;
            }
        } else if metadata.is_file() && depth <= max_depth {
            visit(relative, depth, metadata.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Student;

    fn engine_with_one_student() -> EnrollmentEngine {
        let mut engine = EnrollmentEngine::new(18);
        engine.register_student(Student::new(
            "S1".to_string(),
            "R1".to_string(),
            "Ada".to_string(),
            "ada@example.edu".to_string(),
        ));
        engine
    }

    #[test]
    fn create_backup_writes_all_three_exports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let engine = engine_with_one_student();

        let backup_dir = create_backup(&engine, dir.path()).expect("backup");

        assert!(backup_dir.join(store::STUDENTS_FILE).exists());
        assert!(backup_dir.join(store::COURSES_FILE).exists());
        assert!(backup_dir.join(store::ENROLLMENTS_FILE).exists());
    }

    #[test]
    fn backup_size_sums_recursively() {
        let dir = tempfile::tempdir().expect("temp dir");
        let engine = engine_with_one_student();
        create_backup(&engine, dir.path()).expect("backup");

        let size = backup_size(dir.path()).expect("size");
        assert!(size > 0);
    }

    #[test]
    fn missing_backup_root_is_empty_not_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("does-not-exist");

        assert_eq!(backup_size(&missing).expect("size"), 0);
        assert!(list_backup_files(&missing, 3).expect("list").is_empty());
    }

    #[test]
    fn listing_respects_max_depth() {
        let dir = tempfile::tempdir().expect("temp dir");
        let engine = engine_with_one_student();
        create_backup(&engine, dir.path()).expect("backup");

        // Backup files live at depth 2 (backup_<ts>/students.csv).
        assert!(list_backup_files(dir.path(), 1).expect("list").is_empty());
        let files = list_backup_files(dir.path(), 2).expect("list");
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.depth == 2));
    }
}
