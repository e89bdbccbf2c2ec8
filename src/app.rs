//! The application loop: login screen, per-role view routing, logout.

use crate::prompt::Prompt;
use crate::session::Session;
use crate::views;
use anyhow::Result;
use gradeterm_client::ApiClient;
use gradeterm_models::{LoginRequest, Role};
use tracing::warn;

/// Run the app until the user quits from the login screen.
///
/// Each iteration is one full session: login, exactly one role view
/// (selected by exhaustively matching the session's role), then logout.
pub async fn run(client: &ApiClient, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let Some(session) = login_screen(client, prompt).await? else {
            return Ok(());
        };

        match session.role() {
            Role::Student => views::student::run(client, prompt).await?,
            Role::Teacher => views::teacher::run(client, &session, prompt).await?,
            Role::Admin => views::admin::run(client, &session, prompt).await?,
        }

        session.logout(client);
        prompt.line("Logged out.");
    }
}

/// The login screen. Returns `None` when the user quits instead of
/// logging in. A failed login (bad credentials, or a role this client
/// does not know) shows the error and leaves session state untouched.
async fn login_screen(client: &ApiClient, prompt: &mut dyn Prompt) -> Result<Option<Session>> {
    loop {
        prompt.line("Grade Entry System");
        let items = ["Login".to_string(), "Quit".to_string()];
        if prompt.select("Welcome", &items)? != 0 {
            return Ok(None);
        }

        let username = prompt.input("Username")?;
        let password = prompt.password("Password")?;
        let request = LoginRequest { username, password };

        match Session::login(client, &request).await {
            Ok(session) => {
                prompt.line(&format!(
                    "Logged in as {} ({})",
                    session.user.full_name,
                    session.role().label()
                ));
                return Ok(Some(session));
            }
            Err(err) => {
                warn!(%err, "login failed");
                prompt.line(&format!("Login failed: {err}"));
            }
        }
    }
}
