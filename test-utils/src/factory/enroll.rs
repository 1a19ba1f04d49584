//! Enrollment factory for linking students to training groups.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enrollment row linking the student to the group.
///
/// Duplicate calls for the same pair are allowed on purpose: the capacity
/// accountant must tolerate duplicate enrollment rows, and tests exercise
/// that path.
pub async fn create_enroll(
    db: &DatabaseConnection,
    student_id: i32,
    group_id: i32,
) -> Result<entity::enroll::Model, DbErr> {
    entity::enroll::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        group_id: ActiveValue::Set(group_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Enrolls `count` freshly created students into the group.
///
/// Convenience for capacity tests that only care about the number of
/// enrolled students, not who they are.
pub async fn enroll_students(
    db: &DatabaseConnection,
    group_id: i32,
    count: usize,
) -> Result<(), DbErr> {
    for _ in 0..count {
        let student = crate::factory::student::create_student(db).await?;
        create_enroll(db, student.id, group_id).await?;
    }
    Ok(())
}
