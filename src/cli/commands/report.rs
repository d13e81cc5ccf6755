//! Report command handler

use crate::args::ReportSubcommand;
use campus_records::config::Config;
use campus_records::reports;

/// Dispatch report subcommands
pub fn run(subcommand: ReportSubcommand, config: &Config) {
    let engine = super::load_engine(config);
    match subcommand {
        ReportSubcommand::Top { limit } => {
            let top = reports::top_students_by_gpa(&engine, limit);
            println!("=== Top {limit} Students by GPA ===");
            if top.is_empty() {
                println!("No students with recorded grades found.");
                return;
            }
            for student in &top {
                println!("{} - GPA: {:.2}", student.info.full_name, student.gpa);
            }
        }
        ReportSubcommand::Gpa => {
            let distribution = reports::gpa_distribution(&engine);
            println!("=== GPA Distribution ===");
            if distribution.is_empty() {
                println!("No students with recorded grades found.");
                return;
            }
            for band in reports::GpaBand::descending() {
                if let Some(count) = distribution.get(&band) {
                    println!("{}: {count} students", band.label());
                }
            }
        }
        ReportSubcommand::Enrollment => {
            let stats = reports::enrollment_stats(&engine);
            println!("=== Enrollment Statistics ===");
            println!("Total Students: {}", stats.total_students);
            println!("Total Enrollments: {}", stats.total_enrollments);
            println!(
                "Average Enrollments per Student: {:.2}",
                stats.avg_enrollments
            );
        }
        ReportSubcommand::Departments => {
            let counts = reports::department_course_counts(&engine);
            println!("=== Department-wise Course Count ===");
            if counts.is_empty() {
                println!("No courses found.");
                return;
            }
            for (department, count) in &counts {
                println!("{department}: {count} courses");
            }
        }
    }
}
