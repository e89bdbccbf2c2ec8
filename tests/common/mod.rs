//! Shared test backend: an in-process HTTP server that mimics the Grade
//! Entry System API and records every request it receives.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// One request as the backend saw it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// The `user_id` query parameter, when present.
    pub user_id: Option<String>,
    pub body: Value,
}

/// Handle onto the fake backend's state.
#[derive(Clone, Default)]
pub struct TestBackend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    failing_subjects: Arc<Mutex<HashSet<i64>>>,
}

#[allow(dead_code)]
impl TestBackend {
    /// Make grade updates for the given subject answer 500.
    pub fn fail_subject(&self, subject_id: i64) {
        self.failing_subjects.lock().unwrap().insert(subject_id);
    }

    /// Everything recorded so far, in arrival order.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests with the given method and path prefix.
    pub fn recorded_matching(&self, method: &str, path_prefix: &str) -> Vec<RecordedRequest> {
        self.recorded()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(path_prefix))
            .collect()
    }
}

fn user_json(id: i64, username: &str, full_name: &str, email: &str, role: &str) -> Value {
    json!({
        "user_id": id,
        "username": username,
        "full_name": full_name,
        "email": email,
        "role": role,
    })
}

fn admin() -> Value {
    user_json(1, "admin", "Ada Admin", "ada@example.com", "admin")
}

fn teacher() -> Value {
    user_json(2, "teacher1", "Tess Teacher", "tess@example.com", "teacher")
}

fn student() -> Value {
    user_json(3, "student1", "Sam Student", "sam@example.com", "student")
}

fn subjects() -> Value {
    json!([
        {"subject_id": 1, "subject_name": "Math"},
        {"subject_id": 2, "subject_name": "History"},
        {"subject_id": 3, "subject_name": "Science"},
    ])
}

fn grades_for(student_json: Value) -> Value {
    json!({
        "student": student_json,
        "grades": [
            {"grade_id": 11, "subject_id": 1, "subject_name": "Math", "grade_value": "B"},
            {"subject_id": 2, "subject_name": "History", "grade_value": null},
            {"grade_id": 12, "subject_id": 3, "subject_name": "Science", "grade_value": "A"},
        ],
    })
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

fn detail(status: StatusCode, message: &str) -> Response {
    reply(status, json!({"detail": message}))
}

async fn handle(State(backend): State<TestBackend>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let user_id = request.uri().query().and_then(|q| {
        q.split('&')
            .find_map(|kv| kv.strip_prefix("user_id="))
            .map(str::to_string)
    });
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    backend.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        user_id,
        body: body.clone(),
    });

    match (method.as_str(), path.as_str()) {
        ("POST", "/api/auth/login") => {
            let username = body["username"].as_str().unwrap_or_default();
            let password = body["password"].as_str().unwrap_or_default();
            match (username, password) {
                ("admin", "admin123") => reply(StatusCode::OK, admin()),
                ("teacher1", "teacher123") => reply(StatusCode::OK, teacher()),
                ("student1", "student123") => reply(StatusCode::OK, student()),
                // A role this client does not know about
                ("ghost", "ghost123") => reply(
                    StatusCode::OK,
                    user_json(9, "ghost", "Gil Ghost", "gil@example.com", "superuser"),
                ),
                _ => detail(StatusCode::UNAUTHORIZED, "Invalid username or password"),
            }
        }
        ("GET", "/api/students") => reply(StatusCode::OK, json!([student()])),
        ("GET", "/api/subjects") => reply(StatusCode::OK, subjects()),
        ("POST", "/api/subjects") => reply(
            StatusCode::OK,
            json!({"subject_id": 99, "subject_name": body["subject_name"]}),
        ),
        ("GET", "/api/grades/my-grades") => reply(StatusCode::OK, grades_for(student())),
        ("GET", "/api/users") => reply(StatusCode::OK, json!([admin(), teacher(), student()])),
        ("POST", "/api/users") => {
            let mut created = body.clone();
            created["user_id"] = json!(50);
            created.as_object_mut().map(|o| o.remove("password"));
            reply(StatusCode::OK, created)
        }
        _ => {
            if let Some(rest) = path.strip_prefix("/api/grades/student/") {
                match rest.split_once("/subject/") {
                    Some((_, subject_id)) if method == "PUT" => {
                        let subject_id: i64 = subject_id.parse().unwrap_or(-1);
                        if backend.failing_subjects.lock().unwrap().contains(&subject_id) {
                            detail(StatusCode::INTERNAL_SERVER_ERROR, "Grade update failed")
                        } else {
                            reply(
                                StatusCode::OK,
                                json!({"message": "Grade updated successfully"}),
                            )
                        }
                    }
                    None if method == "GET" => reply(StatusCode::OK, grades_for(student())),
                    _ => detail(StatusCode::NOT_FOUND, "Not found"),
                }
            } else if path.starts_with("/api/subjects/") && method == "DELETE" {
                reply(
                    StatusCode::OK,
                    json!({"message": "Subject deleted successfully"}),
                )
            } else if path.starts_with("/api/users/") && method == "DELETE" {
                reply(
                    StatusCode::OK,
                    json!({"message": "User deleted successfully"}),
                )
            } else {
                detail(StatusCode::NOT_FOUND, "Not found")
            }
        }
    }
}

/// Start the fake backend on an ephemeral port. Returns the state handle
/// and the base URL to point an `ApiClient` at.
pub async fn spawn_backend() -> (TestBackend, String) {
    let backend = TestBackend::default();
    let app = Router::new()
        .fallback(handle)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("test backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    (backend, format!("http://{addr}/api"))
}
