//! Table rendering for list screens.

use gradeterm_models::{GradeRow, Subject, User, grades::display_grade};
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct StudentLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

/// The student list shown to teachers and admins.
pub fn students_table(students: &[User]) -> String {
    let lines = students.iter().map(|s| StudentLine {
        name: s.full_name.clone(),
        email: s.email.clone(),
    });
    Table::new(lines).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct SubjectLine {
    #[tabled(rename = "Subject Name")]
    name: String,
}

pub fn subjects_table(subjects: &[Subject]) -> String {
    let lines = subjects.iter().map(|s| SubjectLine {
        name: s.subject_name.clone(),
    });
    Table::new(lines).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct UserLine {
    #[tabled(rename = "Full Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: &'static str,
}

pub fn users_table(users: &[User]) -> String {
    let lines = users.iter().map(|u| UserLine {
        name: u.full_name.clone(),
        email: u.email.clone(),
        role: u.role.label(),
    });
    Table::new(lines).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct GradeLine {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Grade")]
    grade: &'static str,
}

/// The grade table shown in the student view and the editor.
pub fn grades_table(rows: &[GradeRow]) -> String {
    let lines = rows.iter().map(|r| GradeLine {
        subject: r.subject_name.clone(),
        grade: display_grade(r.grade_value),
    });
    Table::new(lines).with(Style::sharp()).to_string()
}
