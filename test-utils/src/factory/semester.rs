//! Semester factory for creating test semester entities.
//!
//! The default semester is *current*: its date range spans today. Use
//! `start_date`/`end_date` or `create_semester_with_dates` for past or
//! future semesters.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test semesters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::semester::SemesterFactory;
///
/// let semester = SemesterFactory::new(&db)
///     .name("F24")
///     .start_date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
///     .build()
///     .await?;
/// ```
pub struct SemesterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> SemesterFactory<'a> {
    /// Creates a new SemesterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Semester {id}"` where id is auto-incremented
    /// - start_date: 30 days ago
    /// - end_date: 30 days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            name: format!("Semester {}", id),
            start_date: today - Duration::days(30),
            end_date: today + Duration::days(30),
        }
    }

    /// Sets the semester name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the first day of the semester.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the last day of the semester.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the semester entity into the database.
    pub async fn build(self) -> Result<entity::semester::Model, DbErr> {
        entity::semester::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a semester whose date range contains today.
///
/// Shorthand for `SemesterFactory::new(db).build().await`.
pub async fn create_semester(db: &DatabaseConnection) -> Result<entity::semester::Model, DbErr> {
    SemesterFactory::new(db).build().await
}

/// Creates a semester with an explicit date range.
///
/// # Example
///
/// ```rust,ignore
/// // A semester that ended last year
/// let old = create_semester_with_dates(
///     &db,
///     NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
/// ).await?;
/// ```
pub async fn create_semester_with_dates(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<entity::semester::Model, DbErr> {
    SemesterFactory::new(db)
        .start_date(start_date)
        .end_date(end_date)
        .build()
        .await
}
