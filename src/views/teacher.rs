//! The teacher view: dashboard, student list, and the grade editor.

use super::{StudentAction, grade_editor, students_screen};
use crate::prompt::Prompt;
use crate::session::Session;
use anyhow::Result;
use gradeterm_client::ApiClient;
use gradeterm_models::User;

/// The teacher view's modes. Exiting the loop means logout.
enum Mode {
    Dashboard,
    Students,
    EditGrades(User),
    ViewGrades(User),
}

/// Run the teacher view until the user logs out.
pub async fn run(client: &ApiClient, session: &Session, prompt: &mut dyn Prompt) -> Result<()> {
    let mut mode = Mode::Dashboard;
    loop {
        mode = match mode {
            Mode::Dashboard => {
                prompt.line(&format!("Teacher Dashboard - {}", session.user.full_name));
                let items = ["Manage Grades".to_string(), "Logout".to_string()];
                match prompt.select("Dashboard", &items)? {
                    0 => Mode::Students,
                    _ => return Ok(()),
                }
            }
            Mode::Students => match students_screen(client, prompt).await? {
                Some(StudentAction::Edit(student)) => Mode::EditGrades(student),
                Some(StudentAction::View(student)) => Mode::ViewGrades(student),
                None => Mode::Dashboard,
            },
            Mode::EditGrades(student) => {
                grade_editor::run(client, prompt, &student, false).await?;
                Mode::Students
            }
            Mode::ViewGrades(student) => {
                grade_editor::run(client, prompt, &student, true).await?;
                Mode::Students
            }
        };
    }
}
