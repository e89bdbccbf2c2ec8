//! The admin view: dashboard, student grades, subject management, and
//! user management.

use super::{StudentAction, grade_editor, students_screen};
use crate::prompt::Prompt;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use gradeterm_client::ApiClient;
use gradeterm_models::{CreateSubjectDto, CreateUserDto, Role, User};
use tracing::error;
use validator::Validate;

/// The admin view's modes. Exiting the loop means logout.
enum Mode {
    Dashboard,
    Students,
    Subjects,
    Users,
    EditGrades(User),
    ViewGrades(User),
}

/// Run the admin view until the user logs out.
pub async fn run(client: &ApiClient, session: &Session, prompt: &mut dyn Prompt) -> Result<()> {
    let mut mode = Mode::Dashboard;
    loop {
        mode = match mode {
            Mode::Dashboard => {
                prompt.line(&format!("Admin Dashboard - {}", session.user.full_name));
                let items = [
                    "Manage Grades".to_string(),
                    "Manage Subjects".to_string(),
                    "Manage Users".to_string(),
                    "Logout".to_string(),
                ];
                match prompt.select("Dashboard", &items)? {
                    0 => Mode::Students,
                    1 => Mode::Subjects,
                    2 => Mode::Users,
                    _ => return Ok(()),
                }
            }
            Mode::Students => match students_screen(client, prompt).await? {
                Some(StudentAction::Edit(student)) => Mode::EditGrades(student),
                Some(StudentAction::View(student)) => Mode::ViewGrades(student),
                None => Mode::Dashboard,
            },
            Mode::Subjects => {
                subjects_screen(client, prompt).await?;
                Mode::Dashboard
            }
            Mode::Users => {
                users_screen(client, prompt).await?;
                Mode::Dashboard
            }
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

/// The "Manage Subjects" screen. Returns when the user backs out.
async fn subjects_screen(client: &ApiClient, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let subjects = match client.subjects().await {
            Ok(subjects) => subjects,
            Err(err) => {
                error!(%err, "failed to load subjects");
                Vec::new()
            }
        };

        prompt.line("Manage Subjects");
        prompt.line(&render::subjects_table(&subjects));

        let items = [
            "Add Subject".to_string(),
            "Delete Subject".to_string(),
            "Back".to_string(),
        ];
        match prompt.select("Subjects", &items)? {
            0 => {
                let name = prompt.input("Subject name")?;
                if name.trim().is_empty() {
                    prompt.line("Subject name is required.");
                    continue;
                }
                let subject = CreateSubjectDto { subject_name: name };
                match client.create_subject(&subject).await {
                    Ok(_) => prompt.line("Subject added successfully!"),
                    Err(err) => prompt.line(&format!("Failed to add subject: {err}")),
                }
            }
            1 => {
                if subjects.is_empty() {
                    prompt.line("No subjects to delete.");
                    continue;
                }
                let mut names: Vec<String> =
                    subjects.iter().map(|s| s.subject_name.clone()).collect();
                names.push("Cancel".to_string());
                let choice = prompt.select("Delete which subject?", &names)?;
                if choice >= subjects.len() {
                    continue;
                }
                if !prompt.confirm("Are you sure you want to delete this subject?")? {
                    continue;
                }
                match client.delete_subject(subjects[choice].subject_id).await {
                    Ok(_) => prompt.line("Subject deleted successfully!"),
                    Err(err) => prompt.line(&format!("Failed to delete subject: {err}")),
                }
            }
            _ => return Ok(()),
        }
    }
}

/// The "Manage Users" screen. Returns when the user backs out.
async fn users_screen(client: &ApiClient, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let users = match client.users().await {
            Ok(users) => users,
            Err(err) => {
                error!(%err, "failed to load users");
                Vec::new()
            }
        };

        prompt.line("Manage Users");
        prompt.line(&render::users_table(&users));

        let items = [
            "Add User".to_string(),
            "Remove User".to_string(),
            "Back".to_string(),
        ];
        match prompt.select("Users", &items)? {
            0 => {
                let full_name = prompt.input("Full name")?;
                let username = prompt.input("Username")?;
                let password = prompt.password("Password")?;
                let email = prompt.input("Email")?;
                let role_labels: Vec<String> =
                    Role::ALL.iter().map(|r| r.label().to_string()).collect();
                let role = Role::ALL[prompt.select("Role", &role_labels)?];

                if full_name.trim().is_empty()
                    || username.trim().is_empty()
                    || password.trim().is_empty()
                    || email.trim().is_empty()
                {
                    prompt.line("All fields are required.");
                    continue;
                }

                let user = CreateUserDto {
                    full_name,
                    email,
                    role,
                    username,
                    password,
                };
                if let Err(err) = user.validate() {
                    prompt.line(&format!("Invalid user details: {err}"));
                    continue;
                }
                match client.create_user(&user).await {
                    Ok(_) => prompt.line("User added successfully!"),
                    Err(err) => prompt.line(&format!("Failed to add user: {err}")),
                }
            }
            1 => {
                if users.is_empty() {
                    prompt.line("No users to remove.");
                    continue;
                }
                let mut names: Vec<String> = users
                    .iter()
                    .map(|u| format!("{} <{}>", u.full_name, u.email))
                    .collect();
                names.push("Cancel".to_string());
                let choice = prompt.select("Remove which user?", &names)?;
                if choice >= users.len() {
                    continue;
                }
                if !prompt.confirm("Are you sure you want to delete this user?")? {
                    continue;
                }
                match client.delete_user(users[choice].user_id).await {
                    Ok(_) => prompt.line("User deleted successfully!"),
                    Err(err) => prompt.line(&format!("Failed to delete user: {err}")),
                }
            }
            _ => return Ok(()),
        }
    }
}
