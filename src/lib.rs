//! # Gradeterm
//!
//! An interactive terminal front-end for the Grade Entry System API.
//! Students view their grades, teachers and admins edit them, and admins
//! manage subjects and user accounts. All business logic (authentication,
//! persistence, authorization) lives in the backend; this program is a
//! thin presentation and state-synchronization layer.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── app.rs            # Login screen and per-role view routing
//! ├── logging.rs        # Console logging setup
//! ├── prompt.rs         # Prompt trait + dialoguer-backed terminal impl
//! ├── render.rs         # Table rendering for lists
//! ├── session.rs        # Explicit session lifecycle (login/logout)
//! └── views/            # Role views and the grade editor
//!     ├── admin.rs
//!     ├── grade_editor.rs
//!     ├── student.rs
//!     └── teacher.rs
//! ```
//!
//! Control flow: the app loop routes a fresh session to exactly one role
//! view; role views fetch and render lists and may delegate to the grade
//! editor; the editor fetches and saves through the shared
//! [`ApiClient`](gradeterm_client::ApiClient); logout tears the session
//! down and returns to the login screen.
//!
//! Every view is a state machine over a closed mode enum; transitions
//! happen only on explicit menu selections, and re-entering a mode
//! re-fetches the data it displays.
//!
//! ## Quick start
//!
//! ```bash
//! GRADETERM_API_URL=http://localhost:8000/api cargo run
//! ```

pub mod app;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;
pub mod views;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export workspace crates for convenience
pub use gradeterm_client;
pub use gradeterm_config;
pub use gradeterm_models;
