//! Subject domain models and DTOs.

use crate::ids::SubjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A subject offered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub subject_id: SubjectId,
    pub subject_name: String,
}

/// DTO for creating a new subject.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubjectDto {
    #[validate(length(min = 1))]
    pub subject_name: String,
}
