//! Student command handler

use crate::args::StudentSubcommand;
use campus_records::config::Config;
use campus_records::models::{DisplaySummary, Student};

/// Dispatch student subcommands
pub fn run(subcommand: StudentSubcommand, config: &Config) {
    match subcommand {
        StudentSubcommand::Add {
            id,
            reg_no,
            name,
            email,
        } => add(&id, &reg_no, &name, &email, config),
        StudentSubcommand::List { all } => list(all, config),
        StudentSubcommand::Show { id } => show(&id, config),
        StudentSubcommand::Update { id, name, email } => update(&id, name, email, config),
        StudentSubcommand::Deactivate { id } => deactivate(&id, config),
    }
}

fn add(id: &str, reg_no: &str, name: &str, email: &str, config: &Config) {
    let mut engine = super::load_engine(config);
    engine.register_student(Student::new(
        id.to_string(),
        reg_no.to_string(),
        name.to_string(),
        email.to_string(),
    ));
    super::save_engine(&engine, config);
    println!("✓ Student {id} registered");
}

fn list(all: bool, config: &Config) {
    let engine = super::load_engine(config);
    let mut students = if all {
        engine.registry().all_students()
    } else {
        engine.registry().active_students()
    };
    students.sort_by(|a, b| a.id().cmp(b.id()));

    if students.is_empty() {
        println!("No students found.");
        return;
    }
    for student in &students {
        println!("{}", student.display_summary());
    }
}

fn show(id: &str, config: &Config) {
    let engine = super::load_engine(config);
    let Some(student) = engine.registry().student(id) else {
        eprintln!("✗ Student not found: {id}");
        std::process::exit(1);
    };

    println!("{}", student.display_summary());
    println!("Enrolled Courses: {:?}", student.enrolled_courses);
    println!("GPA: {:.2}", student.gpa);
    println!(
        "Status: {}",
        if student.info.active {
            "active"
        } else {
            "inactive"
        }
    );
}

fn update(id: &str, name: Option<String>, email: Option<String>, config: &Config) {
    let mut engine = super::load_engine(config);
    if !engine.update_student_profile(id, name, email) {
        eprintln!("✗ Student not found: {id}");
        std::process::exit(1);
    }
    super::save_engine(&engine, config);
    println!("✓ Student {id} updated");
}

fn deactivate(id: &str, config: &Config) {
    let mut engine = super::load_engine(config);
    if !engine.deactivate_student(id) {
        eprintln!("✗ Student not found: {id}");
        std::process::exit(1);
    }
    super::save_engine(&engine, config);
    println!("✓ Student {id} deactivated");
}
