//! Fitness-test exercise factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a fitness-test exercise in the given semester.
pub async fn create_exercise(
    db: &DatabaseConnection,
    semester_id: i32,
) -> Result<entity::fitness_test_exercise::Model, DbErr> {
    let id = next_id();
    entity::fitness_test_exercise::ActiveModel {
        semester_id: ActiveValue::Set(semester_id),
        name: ActiveValue::Set(format!("Exercise {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
