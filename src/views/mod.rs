//! Role views and the grade editor.
//!
//! Each role view is a state machine over a closed mode enum; transitions
//! are triggered only by explicit menu selections, and entering a mode
//! re-fetches the data it displays. List load failures are logged and
//! render as an empty list; mutating actions surface their failures as a
//! message line.

pub mod admin;
pub mod grade_editor;
pub mod student;
pub mod teacher;

use crate::prompt::Prompt;
use crate::render;
use anyhow::Result;
use gradeterm_client::ApiClient;
use gradeterm_models::User;
use tracing::error;

/// What the user picked on the student list screen.
pub(crate) enum StudentAction {
    Edit(User),
    View(User),
}

/// The "Manage Student Grades" screen shared by teachers and admins.
///
/// Returns `None` when the user backs out to the dashboard.
pub(crate) async fn students_screen(
    client: &ApiClient,
    prompt: &mut dyn Prompt,
) -> Result<Option<StudentAction>> {
    loop {
        let students = match client.students().await {
            Ok(students) => students,
            Err(err) => {
                error!(%err, "failed to load students");
                Vec::new()
            }
        };

        prompt.line("Manage Student Grades");
        prompt.line(&render::students_table(&students));

        let mut items: Vec<String> = students.iter().map(|s| s.full_name.clone()).collect();
        items.push("Back".to_string());
        let choice = prompt.select("Select a student", &items)?;
        if choice >= students.len() {
            return Ok(None);
        }
        let student = students[choice].clone();

        let actions = [
            "Edit Grades".to_string(),
            "View Grades".to_string(),
            "Back".to_string(),
        ];
        match prompt.select(&student.full_name, &actions)? {
            0 => return Ok(Some(StudentAction::Edit(student))),
            1 => return Ok(Some(StudentAction::View(student))),
            _ => continue,
        }
    }
}
