//! Domain models: passive records with identity and status fields

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod semester;
pub mod student;

pub use course::{Course, CourseBuilder};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use instructor::Instructor;
pub use person::{DisplaySummary, PersonInfo};
pub use semester::Semester;
pub use student::Student;
