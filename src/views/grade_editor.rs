//! The grade editor.
//!
//! Fetches one student's full grade list on entry and holds it as local
//! editable state; edits mutate the in-memory copy only. Saving walks
//! the rows in the order they were loaded and issues one update request
//! per row, sequentially. There is no rollback and no retry: every row
//! is attempted, and the caller gets a per-row outcome report naming
//! exactly the rows that failed.
//!
//! Opened read-only, the editor rejects edits and offers no save action;
//! the only menu entry is "Back".

use crate::prompt::Prompt;
use crate::render;
use anyhow::Result;
use gradeterm_client::{ApiClient, ApiError};
use gradeterm_models::{GradeRow, GradeUpdate, GradeValue, SubjectId, User, grades::display_grade};
use tracing::{error, info};

/// Local editing state for one student's grades.
pub struct GradeEditor {
    student: User,
    rows: Vec<GradeRow>,
    read_only: bool,
}

/// What happened to one row during a save.
pub struct RowOutcome {
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub result: Result<(), ApiError>,
}

/// Per-row outcomes of one save pass, in row order.
pub struct SaveReport {
    pub outcomes: Vec<RowOutcome>,
}

impl SaveReport {
    pub fn all_saved(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// The rows that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ApiError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(()) => None,
            Err(err) => Some((o.subject_name.as_str(), err)),
        })
    }
}

impl GradeEditor {
    /// Fetch the student's grades and open an editor over them.
    pub async fn open(
        client: &ApiClient,
        student: &User,
        read_only: bool,
    ) -> gradeterm_client::Result<Self> {
        let data = client.student_grades(student.user_id).await?;
        Ok(Self {
            student: data.student,
            rows: data.grades,
            read_only,
        })
    }

    /// Build an editor over already-fetched rows.
    pub fn new(student: User, rows: Vec<GradeRow>, read_only: bool) -> Self {
        Self {
            student,
            rows,
            read_only,
        }
    }

    pub fn student(&self) -> &User {
        &self.student
    }

    pub fn rows(&self) -> &[GradeRow] {
        &self.rows
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Change one row's value in the local copy. Returns `false` (and
    /// changes nothing) when the editor is read-only or the subject is
    /// not among the loaded rows.
    pub fn set_value(&mut self, subject_id: SubjectId, value: Option<GradeValue>) -> bool {
        if self.read_only {
            return false;
        }
        match self.rows.iter_mut().find(|r| r.subject_id == subject_id) {
            Some(row) => {
                row.grade_value = value;
                true
            }
            None => false,
        }
    }

    /// Persist the local state: one update request per row, sequentially,
    /// in loaded order. A failure does not stop the pass.
    pub async fn save(&self, client: &ApiClient) -> SaveReport {
        let mut outcomes = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let update = GradeUpdate {
                grade_value: row.grade_value,
            };
            let result = client
                .update_grade(self.student.user_id, row.subject_id, &update)
                .await
                .map(|_| ());
            if let Err(err) = &result {
                error!(subject_id = %row.subject_id, %err, "grade update failed");
            }
            outcomes.push(RowOutcome {
                subject_id: row.subject_id,
                subject_name: row.subject_name.clone(),
                result,
            });
        }
        SaveReport { outcomes }
    }

    /// The editor menu. Read-only editors expose no row entries and no
    /// save action.
    pub fn menu_items(&self) -> Vec<String> {
        if self.read_only {
            return vec!["Back".to_string()];
        }
        let mut items: Vec<String> = self
            .rows
            .iter()
            .map(|r| format!("{} [{}]", r.subject_name, display_grade(r.grade_value)))
            .collect();
        items.push("Save Grades".to_string());
        items.push("Back".to_string());
        items
    }
}

/// Interactive editor loop. Returns when the user picks "Back".
pub async fn run(
    client: &ApiClient,
    prompt: &mut dyn Prompt,
    student: &User,
    read_only: bool,
) -> Result<()> {
    let mut editor = match GradeEditor::open(client, student, read_only).await {
        Ok(editor) => editor,
        Err(err) => {
            error!(student_id = %student.user_id, %err, "failed to load grades");
            prompt.line(&format!("Failed to load grades: {err}"));
            return Ok(());
        }
    };

    let title = if read_only {
        format!("Grades for {} (read-only)", editor.student().full_name)
    } else {
        format!("Grades for {}", editor.student().full_name)
    };

    loop {
        prompt.line(&title);
        prompt.line(&render::grades_table(editor.rows()));

        let items = editor.menu_items();
        let choice = prompt.select("Grade editor", &items)?;
        let row_count = if read_only { 0 } else { editor.rows().len() };

        if choice < row_count {
            let row = &editor.rows()[choice];
            let subject_id = row.subject_id;
            let label = format!("Grade for {}", row.subject_name);

            let mut value_items = vec!["-- No Grade --".to_string()];
            value_items.extend(GradeValue::ALL.iter().map(|g| g.as_str().to_string()));
            let picked = prompt.select(&label, &value_items)?;
            let value = if picked == 0 {
                None
            } else {
                Some(GradeValue::ALL[picked - 1])
            };
            editor.set_value(subject_id, value);
        } else if !read_only && choice == row_count {
            let report = editor.save(client).await;
            if report.all_saved() {
                info!(student_id = %editor.student().user_id, "grades saved");
                prompt.line("Grades saved successfully!");
            } else {
                for (subject, err) in report.failures() {
                    prompt.line(&format!("Failed to save {subject}: {err}"));
                }
            }
        } else {
            return Ok(());
        }
    }
}
