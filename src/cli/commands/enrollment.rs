//! Enrollment, grading, and transcript command handlers

use campus_records::config::Config;
use campus_records::engine::Transcript;

/// Enroll a student into a course
pub fn enroll(student_id: &str, course_code: &str, config: &Config) {
    let mut engine = super::load_engine(config);
    if let Err(e) = engine.enroll(student_id, course_code) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    super::save_engine(&engine, config);
    println!(
        "✓ Enrolled {student_id} in {course_code} ({} of {} credits used)",
        engine.active_credits(student_id),
        engine.max_credits_per_semester()
    );
}

/// Remove a student's active enrollment in a course
pub fn unenroll(student_id: &str, course_code: &str, config: &Config) {
    let mut engine = super::load_engine(config);
    if engine.unenroll(student_id, course_code) {
        super::save_engine(&engine, config);
        println!("✓ Unenrolled {student_id} from {course_code}");
    } else {
        println!("No active enrollment for {student_id} in {course_code}; nothing to do.");
    }
}

/// Record marks for a student's active enrollment
pub fn grade(student_id: &str, course_code: &str, marks: f64, config: &Config) {
    let mut engine = super::load_engine(config);
    if engine.record_grade(student_id, course_code, marks) {
        super::save_engine(&engine, config);
        let gpa = engine
            .registry()
            .student(student_id)
            .map_or(0.0, |s| s.gpa);
        println!("✓ Recorded {marks} marks for {student_id} in {course_code} (GPA now {gpa:.2})");
    } else {
        println!("No active enrollment for {student_id} in {course_code}; nothing to do.");
    }
}

/// Print a student's transcript
pub fn transcript(student_id: &str, config: &Config) {
    let engine = super::load_engine(config);
    match engine.transcript(student_id) {
        Ok(transcript) => print_transcript(&transcript),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn print_transcript(transcript: &Transcript) {
    println!("=== TRANSCRIPT ===");
    println!("Student: {}", transcript.student_name);
    println!("Registration No: {}", transcript.reg_no);
    println!("GPA: {:.2}", transcript.gpa);
    println!();
    println!("Course Records:");
    println!(
        "{:<10} {:<30} {:>7} {:>5} {:>6}",
        "Code", "Title", "Credits", "Grade", "Marks"
    );

    if transcript.rows.is_empty() {
        println!("(no active enrollments)");
        return;
    }
    for row in &transcript.rows {
        let grade = row.grade.map_or("N/A", |g| g.letter());
        let marks = row
            .marks
            .map_or_else(|| "-".to_string(), |m| format!("{m:.1}"));
        println!(
            "{:<10} {:<30} {:>7} {:>5} {:>6}",
            row.course_code, row.title, row.credits, grade, marks
        );
    }
}
