//! View model for semesters.

use chrono::NaiveDate;
use serde::Serialize;

/// A semester as exposed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterView {
    /// Unique identifier for the semester.
    pub id: i32,
    /// Human-readable semester name, e.g. "F24".
    pub name: String,
    /// First day of the semester (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the semester (inclusive).
    pub end_date: NaiveDate,
}

impl SemesterView {
    /// Converts an entity model to a view model at the repository boundary.
    pub fn from_entity(entity: entity::semester::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }
}
