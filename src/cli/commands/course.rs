//! Course command handler

use crate::args::CourseSubcommand;
use campus_records::config::Config;
use campus_records::models::{Course, Semester};
use campus_records::registry::CourseQuery;

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    match subcommand {
        CourseSubcommand::Add {
            code,
            title,
            credits,
            instructor,
            semester,
            department,
        } => add(&code, &title, credits, &instructor, semester, &department, config),
        CourseSubcommand::List => list(config),
        CourseSubcommand::Search {
            instructor,
            department,
            semester,
        } => search(instructor, department, semester, config),
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    code: &str,
    title: &str,
    credits: u32,
    instructor: &str,
    semester: Semester,
    department: &str,
    config: &Config,
) {
    let course = match Course::builder()
        .code(code)
        .title(title)
        .credits(credits)
        .instructor_id(instructor)
        .semester(semester)
        .department(department)
        .build()
    {
        Ok(course) => course,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let mut engine = super::load_engine(config);
    engine.register_course(course);
    super::save_engine(&engine, config);
    println!("✓ Course {code} registered");
}

fn list(config: &Config) {
    let engine = super::load_engine(config);
    let mut courses = engine.registry().all_courses();
    courses.sort_by(|a, b| a.code.cmp(&b.code));

    if courses.is_empty() {
        println!("No courses found.");
        return;
    }
    print_courses(&courses);
}

fn search(
    instructor: Option<String>,
    department: Option<String>,
    semester: Option<Semester>,
    config: &Config,
) {
    let query = if let Some(instructor) = instructor {
        CourseQuery::Instructor(instructor)
    } else if let Some(department) = department {
        CourseQuery::Department(department)
    } else if let Some(semester) = semester {
        CourseQuery::Semester(semester)
    } else {
        eprintln!("✗ Provide one of --instructor, --department, or --semester");
        std::process::exit(1);
    };

    let engine = super::load_engine(config);
    let mut courses = engine.registry().search_courses(&query);
    courses.sort_by(|a, b| a.code.cmp(&b.code));

    if courses.is_empty() {
        println!("No matching courses.");
        return;
    }
    print_courses(&courses);
}

fn print_courses(courses: &[Course]) {
    for course in courses {
        println!(
            "{}: {} ({} credits, {}, {}, instructor {}{})",
            course.code,
            course.title,
            course.credits,
            course.semester,
            course.department,
            course.instructor_id,
            if course.active { "" } else { ", inactive" }
        );
    }
}
