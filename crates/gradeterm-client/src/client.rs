//! The API client itself.

use crate::error::{ApiError, Result, backend_error};
use gradeterm_models::{
    CreateSubjectDto, CreateUserDto, GradeUpdate, LoginRequest, MessageResponse, StudentGrades,
    Subject, SubjectId, User, UserId,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use tracing::debug;

/// HTTP client for the Grade Entry System backend.
///
/// Holds the base URL, the underlying connection pool, and the session
/// user identifier. The identifier is attached to every outgoing
/// request's query parameters once set;
/// [`clear_session_user`](ApiClient::clear_session_user) removes it on
/// logout.
///
/// No retry, backoff, timeout, or cancellation logic: a request runs
/// until the backend answers or the transport fails.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session_user: Mutex<Option<UserId>>,
}

impl ApiClient {
    /// Create a client against the given base URL, e.g.
    /// `http://localhost:8000/api`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session_user: Mutex::new(None),
        }
    }

    /// Store the identifier attached to every subsequent request.
    pub fn set_session_user(&self, user_id: UserId) {
        *self.lock_session() = Some(user_id);
    }

    /// Forget the stored identifier. Requests sent afterwards carry no
    /// `user_id` parameter.
    pub fn clear_session_user(&self) {
        *self.lock_session() = None;
    }

    /// The currently stored session user identifier, if any.
    pub fn session_user(&self) -> Option<UserId> {
        *self.lock_session()
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Option<UserId>> {
        // A poisoned lock only means a panic elsewhere; the stored id is
        // still valid.
        self.session_user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session user id, mirroring the original request
    /// interceptor: every request carries it once a user is logged in.
    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session_user() {
            Some(user_id) => request.query(&[("user_id", user_id.into_inner())]),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.with_session(request).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "response received");
        let body = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(backend_error(status, &body))
        }
    }

    // Auth

    /// `POST /auth/login`. On success the backend returns the
    /// authenticated user directly; the caller decides whether to store
    /// the id via [`set_session_user`](ApiClient::set_session_user).
    pub async fn login(&self, request: &LoginRequest) -> Result<User> {
        self.execute(self.http.post(self.url("/auth/login")).json(request))
            .await
    }

    // Students

    /// `GET /students` - all student accounts. Teacher/admin only.
    pub async fn students(&self) -> Result<Vec<User>> {
        self.execute(self.http.get(self.url("/students"))).await
    }

    // Grades

    /// `GET /grades/my-grades` - the logged-in student's own grades.
    pub async fn my_grades(&self) -> Result<StudentGrades> {
        self.execute(self.http.get(self.url("/grades/my-grades")))
            .await
    }

    /// `GET /grades/student/{id}` - one student's grades. Teacher/admin only.
    pub async fn student_grades(&self, student_id: UserId) -> Result<StudentGrades> {
        self.execute(
            self.http
                .get(self.url(&format!("/grades/student/{student_id}"))),
        )
        .await
    }

    /// `PUT /grades/student/{id}/subject/{id}` - persist one grade row.
    pub async fn update_grade(
        &self,
        student_id: UserId,
        subject_id: SubjectId,
        update: &GradeUpdate,
    ) -> Result<MessageResponse> {
        self.execute(
            self.http
                .put(self.url(&format!(
                    "/grades/student/{student_id}/subject/{subject_id}"
                )))
                .json(update),
        )
        .await
    }

    // Subjects

    /// `GET /subjects` - all subjects.
    pub async fn subjects(&self) -> Result<Vec<Subject>> {
        self.execute(self.http.get(self.url("/subjects"))).await
    }

    /// `POST /subjects` - create a subject. Admin only.
    pub async fn create_subject(&self, subject: &CreateSubjectDto) -> Result<Subject> {
        self.execute(self.http.post(self.url("/subjects")).json(subject))
            .await
    }

    /// `DELETE /subjects/{id}` - remove a subject. Admin only.
    pub async fn delete_subject(&self, subject_id: SubjectId) -> Result<MessageResponse> {
        self.execute(
            self.http
                .delete(self.url(&format!("/subjects/{subject_id}"))),
        )
        .await
    }

    // Users

    /// `GET /users` - all user accounts. Admin only.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.execute(self.http.get(self.url("/users"))).await
    }

    /// `POST /users` - create a user account. Admin only.
    pub async fn create_user(&self, user: &CreateUserDto) -> Result<User> {
        self.execute(self.http.post(self.url("/users")).json(user))
            .await
    }

    /// `DELETE /users/{id}` - remove a user account. Admin only.
    pub async fn delete_user(&self, user_id: UserId) -> Result<MessageResponse> {
        self.execute(self.http.delete(self.url(&format!("/users/{user_id}"))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(
            client.url("/auth/login"),
            "http://localhost:8000/api/auth/login"
        );
    }

    #[test]
    fn test_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.url("/subjects"), "http://localhost:8000/api/subjects");
    }

    #[test]
    fn test_session_user_lifecycle() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(client.session_user(), None);

        client.set_session_user(UserId::new(7));
        assert_eq!(client.session_user(), Some(UserId::new(7)));

        client.clear_session_user();
        assert_eq!(client.session_user(), None);
    }
}
