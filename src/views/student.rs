//! The student view: one screen showing the logged-in student's own
//! grades, with logout as the only action.

use crate::prompt::Prompt;
use crate::render;
use anyhow::Result;
use gradeterm_client::ApiClient;
use tracing::error;

/// Fetch and render the student's grades, then wait for logout.
pub async fn run(client: &ApiClient, prompt: &mut dyn Prompt) -> Result<()> {
    match client.my_grades().await {
        Ok(data) => {
            prompt.line(&format!("My Grades - {}", data.student.full_name));
            prompt.line(&render::grades_table(&data.grades));
        }
        Err(err) => {
            error!(%err, "failed to load own grades");
            prompt.line(&format!("Failed to load grades: {err}"));
        }
    }

    let items = ["Logout".to_string()];
    prompt.select("Menu", &items)?;
    Ok(())
}
