//! Student factory for creating test student entities.

use entity::student::MEDICAL_GROUP_MINIMAL;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .medical_group_id(2)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    medical_group_id: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - medical_group_id: `MEDICAL_GROUP_MINIMAL`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            medical_group_id: MEDICAL_GROUP_MINIMAL,
        }
    }

    /// Sets the student's medical clearance group.
    pub fn medical_group_id(mut self, medical_group_id: i32) -> Self {
        self.medical_group_id = medical_group_id;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            medical_group_id: ActiveValue::Set(self.medical_group_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with the minimal medical clearance sentinel.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student in the given medical clearance group.
pub async fn create_student_with_medical_group(
    db: &DatabaseConnection,
    medical_group_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db)
        .medical_group_id(medical_group_id)
        .build()
        .await
}
