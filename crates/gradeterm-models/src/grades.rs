//! Grade values, grade rows, and grade update DTOs.
//!
//! A grade's value, when present, is one of six fixed letters. The
//! [`GradeValue`] enum makes any other value unrepresentable on the
//! client side; the editor only ever offers these six letters plus
//! "unset".

use crate::ids::{GradeId, SubjectId};
use crate::users::User;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade. The only values a grade may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeValue {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl GradeValue {
    /// All letter grades, in the order the editor offers them.
    pub const ALL: [GradeValue; 6] = [
        GradeValue::A,
        GradeValue::B,
        GradeValue::C,
        GradeValue::D,
        GradeValue::E,
        GradeValue::F,
    ];

    /// The wire (and display) representation of the grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeValue::A => "A",
            GradeValue::B => "B",
            GradeValue::C => "C",
            GradeValue::D => "D",
            GradeValue::E => "E",
            GradeValue::F => "F",
        }
    }
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for grade value parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGradeValueError(pub String);

impl std::error::Error for ParseGradeValueError {}

impl fmt::Display for ParseGradeValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid grade value: {}", self.0)
    }
}

impl FromStr for GradeValue {
    type Err = ParseGradeValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(GradeValue::A),
            "B" => Ok(GradeValue::B),
            "C" => Ok(GradeValue::C),
            "D" => Ok(GradeValue::D),
            "E" => Ok(GradeValue::E),
            "F" => Ok(GradeValue::F),
            other => Err(ParseGradeValueError(other.to_string())),
        }
    }
}

/// Render an optional grade for tables: the letter, or "N/A" when absent.
pub fn display_grade(value: Option<GradeValue>) -> &'static str {
    match value {
        Some(v) => v.as_str(),
        None => "N/A",
    }
}

/// One subject's grade for a student, as reported by the backend.
///
/// The `grade_id` exists only for grades that have been persisted at
/// least once; the client carries it but never uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRow {
    #[serde(default)]
    pub grade_id: Option<GradeId>,
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub grade_value: Option<GradeValue>,
}

/// A student's full grade list, with the student it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGrades {
    pub student: User,
    pub grades: Vec<GradeRow>,
}

/// DTO for updating one grade. `None` clears the grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeUpdate {
    pub grade_value: Option<GradeValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use crate::roles::Role;

    #[test]
    fn test_grade_value_as_str() {
        assert_eq!(GradeValue::A.as_str(), "A");
        assert_eq!(GradeValue::F.as_str(), "F");
    }

    #[test]
    fn test_grade_value_from_str() {
        for value in GradeValue::ALL {
            assert_eq!(value.as_str().parse::<GradeValue>().unwrap(), value);
        }
    }

    #[test]
    fn test_grade_value_from_str_invalid() {
        assert!("G".parse::<GradeValue>().is_err());
        assert!("a".parse::<GradeValue>().is_err());
        assert!("".parse::<GradeValue>().is_err());
    }

    #[test]
    fn test_grade_value_serialize() {
        assert_eq!(serde_json::to_string(&GradeValue::B).unwrap(), r#""B""#);
    }

    #[test]
    fn test_grade_value_deserialize_invalid_fails() {
        let result: Result<GradeValue, _> = serde_json::from_str(r#""Z""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_grade() {
        assert_eq!(display_grade(Some(GradeValue::C)), "C");
        assert_eq!(display_grade(None), "N/A");
    }

    #[test]
    fn test_grade_update_serializes_null() {
        let update = GradeUpdate { grade_value: None };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"grade_value":null}"#
        );
    }

    #[test]
    fn test_grade_row_deserialize_without_grade_id() {
        // Unpersisted grades come back without a grade_id field
        let row: GradeRow = serde_json::from_str(
            r#"{"subject_id": 2, "subject_name": "Math", "grade_value": null}"#,
        )
        .unwrap();
        assert_eq!(row.grade_id, None);
        assert_eq!(row.subject_id, SubjectId::new(2));
        assert_eq!(row.grade_value, None);
    }

    #[test]
    fn test_student_grades_deserialize() {
        let body = r#"{
            "student": {
                "user_id": 4,
                "username": "student1",
                "full_name": "Sam Student",
                "email": "sam@example.com",
                "role": "student"
            },
            "grades": [
                {"grade_id": 1, "subject_id": 2, "subject_name": "Math", "grade_value": "B"}
            ]
        }"#;
        let parsed: StudentGrades = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.student.user_id, UserId::new(4));
        assert_eq!(parsed.student.role, Role::Student);
        assert_eq!(parsed.grades.len(), 1);
        assert_eq!(parsed.grades[0].grade_value, Some(GradeValue::B));
    }
}
