//! CLI argument definitions for Campus Records

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_records::config::ConfigOverrides;
use campus_records::logger::Level;
use campus_records::models::Semester;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Register a new student (overwrites an existing record with the same id).
    Add {
        /// Unique student identifier
        #[arg(long)]
        id: String,
        /// Institutional registration number
        #[arg(long = "reg-no")]
        reg_no: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
    },
    /// List students (active only unless --all is given).
    List {
        /// Include deactivated students
        #[arg(long)]
        all: bool,
    },
    /// Show one student's profile, enrollments, and GPA.
    Show {
        /// Student identifier
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Update a student's profile fields.
    Update {
        /// Student identifier
        #[arg(value_name = "ID")]
        id: String,
        /// New full name
        #[arg(long)]
        name: Option<String>,
        /// New contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Deactivate a student (records are never deleted).
    Deactivate {
        /// Student identifier
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Register a new course (overwrites an existing record with the same code).
    Add {
        /// Unique course code (e.g., CS101)
        #[arg(long)]
        code: String,
        /// Course title
        #[arg(long)]
        title: String,
        /// Credit count (must be positive)
        #[arg(long)]
        credits: u32,
        /// Assigned instructor identifier
        #[arg(long)]
        instructor: String,
        /// Semester the course runs in (spring, summer, fall)
        #[arg(long)]
        semester: Semester,
        /// Owning department
        #[arg(long)]
        department: String,
    },
    /// List all courses.
    List,
    /// Search courses by instructor, department, or semester.
    Search {
        /// Exact instructor identifier
        #[arg(long, group = "criteria")]
        instructor: Option<String>,
        /// Department name (case-insensitive)
        #[arg(long, group = "criteria")]
        department: Option<String>,
        /// Semester (spring, summer, fall)
        #[arg(long, group = "criteria")]
        semester: Option<Semester>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DataSubcommand {
    /// Import students from a CSV file into the data directory.
    ImportStudents {
        /// Path to a students CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Import courses from a CSV file into the data directory.
    ImportCourses {
        /// Path to a courses CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export students to a CSV file.
    ExportStudents {
        /// Destination path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export courses to a CSV file.
    ExportCourses {
        /// Destination path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Create a timestamped backup of the data directory.
    Backup,
    /// List backup files and their total size.
    Backups {
        /// Maximum directory depth to list
        #[arg(long, default_value_t = 3)]
        depth: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReportSubcommand {
    /// Top students by GPA.
    Top {
        /// Number of students to show
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// GPA distribution across bands.
    Gpa,
    /// Enrollment statistics.
    Enrollment,
    /// Department-wise course counts.
    Departments,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage student records.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage course records.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Enroll a student into a course.
    Enroll {
        /// Student identifier
        #[arg(value_name = "STUDENT")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE")]
        course_code: String,
    },
    /// Remove a student's active enrollment in a course.
    Unenroll {
        /// Student identifier
        #[arg(value_name = "STUDENT")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE")]
        course_code: String,
    },
    /// Record marks for a student's active enrollment.
    Grade {
        /// Student identifier
        #[arg(value_name = "STUDENT")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE")]
        course_code: String,
        /// Numeric marks (0-100)
        #[arg(value_name = "MARKS")]
        marks: f64,
    },
    /// Print a student's transcript.
    Transcript {
        /// Student identifier
        #[arg(value_name = "STUDENT")]
        student_id: String,
    },
    /// Import, export, and back up records data.
    Data {
        #[command(subcommand)]
        subcommand: DataSubcommand,
    },
    /// Aggregate reports over students and courses.
    Report {
        #[command(subcommand)]
        subcommand: ReportSubcommand,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusrecords",
    about = "Campus Records command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the records data directory for this run
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the backup directory for this run
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Override the per-semester credit cap for this run
    #[arg(long = "max-credits", value_name = "CREDITS")]
    pub max_credits: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            backup_dir: self
                .backup_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_credits: self.max_credits,
        }
    }
}
