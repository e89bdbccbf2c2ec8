//! # Gradeterm Models
//!
//! Domain models and DTOs for the Grade Entry System terminal client.
//!
//! This crate provides the data structures exchanged with the backend API,
//! including wire entities, request/response DTOs, and validation schemas.
//!
//! # Modules
//!
//! - [`auth`]: Authentication models (login request)
//! - [`grades`]: Grade values, grade rows, and grade update DTOs
//! - [`ids`]: Strongly-typed ID newtypes
//! - [`responses`]: Generic backend response shapes
//! - [`roles`]: The closed set of user roles
//! - [`subjects`]: Subject models
//! - [`users`]: User models
//!
//! # Example
//!
//! ```ignore
//! use gradeterm_models::roles::Role;
//! use gradeterm_models::grades::GradeValue;
//!
//! let role: Role = "teacher".parse().unwrap();
//! let grade: GradeValue = "B".parse().unwrap();
//! ```

pub mod auth;
pub mod grades;
pub mod ids;
pub mod responses;
pub mod roles;
pub mod subjects;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::LoginRequest;

pub use grades::{GradeRow, GradeUpdate, GradeValue, ParseGradeValueError, StudentGrades};

pub use ids::{GradeId, SubjectId, UserId};

pub use responses::MessageResponse;

pub use roles::{ParseRoleError, Role};

pub use subjects::{CreateSubjectDto, Subject};

pub use users::{CreateUserDto, User};
