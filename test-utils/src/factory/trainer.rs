//! Trainer factory for creating test trainer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trainers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trainer::TrainerFactory;
///
/// let trainer = TrainerFactory::new(&db)
///     .user_id(1001)
///     .name("Coach Ivanov")
///     .build()
///     .await?;
/// ```
pub struct TrainerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> TrainerFactory<'a> {
    /// Creates a new TrainerFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique id
    /// - name: `"Trainer {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id as i32,
            name: format!("Trainer {}", id),
        }
    }

    /// Sets the linked user account id.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the trainer's display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the trainer entity into the database.
    pub async fn build(self) -> Result<entity::trainer::Model, DbErr> {
        entity::trainer::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trainer with default values.
///
/// Shorthand for `TrainerFactory::new(db).build().await`.
pub async fn create_trainer(db: &DatabaseConnection) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db).build().await
}

/// Creates a trainer linked to the given user account id.
pub async fn create_trainer_with_user_id(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db).user_id(user_id).build().await
}
