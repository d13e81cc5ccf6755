//! Import/export and backup command handlers

use crate::args::DataSubcommand;
use campus_records::config::Config;
use campus_records::io::{backup, csv};
use std::path::{Path, PathBuf};

/// Dispatch data subcommands
pub fn run(subcommand: DataSubcommand, config: &Config) {
    match subcommand {
        DataSubcommand::ImportStudents { file } => import_students(&file, config),
        DataSubcommand::ImportCourses { file } => import_courses(&file, config),
        DataSubcommand::ExportStudents { file } => export_students(&file, config),
        DataSubcommand::ExportCourses { file } => export_courses(&file, config),
        DataSubcommand::Backup => create_backup(config),
        DataSubcommand::Backups { depth } => list_backups(depth, config),
    }
}

fn backup_root(config: &Config) -> PathBuf {
    PathBuf::from(&config.paths.backup_dir)
}

fn import_students(file: &Path, config: &Config) {
    let students = match csv::import_students(file) {
        Ok(students) => students,
        Err(e) => {
            eprintln!("✗ Failed to import {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    let mut engine = super::load_engine(config);
    let count = students.len();
    for student in students {
        engine.register_student(student);
    }
    super::save_engine(&engine, config);
    println!("✓ Imported {count} students from {}", file.display());
}

fn import_courses(file: &Path, config: &Config) {
    let courses = match csv::import_courses(file) {
        Ok(courses) => courses,
        Err(e) => {
            eprintln!("✗ Failed to import {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    let mut engine = super::load_engine(config);
    let count = courses.len();
    for course in courses {
        engine.register_course(course);
    }
    super::save_engine(&engine, config);
    println!("✓ Imported {count} courses from {}", file.display());
}

fn export_students(file: &Path, config: &Config) {
    let engine = super::load_engine(config);
    if let Err(e) = csv::export_students(file, &engine.registry().all_students()) {
        eprintln!("✗ Failed to export {}: {e}", file.display());
        std::process::exit(1);
    }
    println!(
        "✓ Exported {} students to {}",
        engine.registry().student_count(),
        file.display()
    );
}

fn export_courses(file: &Path, config: &Config) {
    let engine = super::load_engine(config);
    if let Err(e) = csv::export_courses(file, &engine.registry().all_courses()) {
        eprintln!("✗ Failed to export {}: {e}", file.display());
        std::process::exit(1);
    }
    println!(
        "✓ Exported {} courses to {}",
        engine.registry().course_count(),
        file.display()
    );
}

fn create_backup(config: &Config) {
    let engine = super::load_engine(config);
    match backup::create_backup(&engine, &backup_root(config)) {
        Ok(path) => println!("✓ Backup created at: {}", path.display()),
        Err(e) => {
            eprintln!("✗ Backup failed: {e}");
            std::process::exit(1);
        }
    }
}

fn list_backups(depth: usize, config: &Config) {
    let root = backup_root(config);
    let files = match backup::list_backup_files(&root, depth) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("✗ Failed to list backups: {e}");
            std::process::exit(1);
        }
    };

    if files.is_empty() {
        println!("No backup files under {}", root.display());
        return;
    }
    for file in &files {
        println!(
            "Depth {}: {} ({} bytes)",
            file.depth,
            file.relative_path.display(),
            file.size
        );
    }
    match backup::backup_size(&root) {
        Ok(total) => println!("Total size: {total} bytes"),
        Err(e) => eprintln!("✗ Failed to compute backup size: {e}"),
    }
}
