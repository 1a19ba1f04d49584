//! Training group factory for creating test group entities.
//!
//! Besides the group row itself, the factory can insert the group's allowed
//! medical groups and trainer assignments (join-table rows) in one `build()`.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db, sport.id, semester.id)
///     .name("Beginners")
///     .capacity(10)
///     .allowed_medical_groups(vec![1, 2])
///     .trainers(vec![trainer.user_id])
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sport_id: i32,
    semester_id: i32,
    capacity: i32,
    allowed_medical_groups: Vec<i32>,
    trainer_user_ids: Vec<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    /// - capacity: `20`
    /// - no allowed medical groups, no trainer assignments
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sport_id` - Sport this group belongs to
    /// - `semester_id` - Semester this group is scheduled in
    pub fn new(db: &'a DatabaseConnection, sport_id: i32, semester_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            sport_id,
            semester_id,
            capacity: 20,
            allowed_medical_groups: Vec::new(),
            trainer_user_ids: Vec::new(),
        }
    }

    /// Sets the group's section label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the enrollment capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the medical-group ids allowed to join this group.
    pub fn allowed_medical_groups(mut self, medical_group_ids: Vec<i32>) -> Self {
        self.allowed_medical_groups = medical_group_ids;
        self
    }

    /// Sets the trainer *user account* ids assigned to this group.
    pub fn trainers(mut self, user_ids: Vec<i32>) -> Self {
        self.trainer_user_ids = user_ids;
        self
    }

    /// Builds and inserts the group entity plus its join-table rows.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let group = entity::group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            sport_id: ActiveValue::Set(self.sport_id),
            semester_id: ActiveValue::Set(self.semester_id),
            capacity: ActiveValue::Set(self.capacity),
        }
        .insert(self.db)
        .await?;

        for medical_group_id in self.allowed_medical_groups {
            entity::group_allowed_medical_group::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                medical_group_id: ActiveValue::Set(medical_group_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for user_id in self.trainer_user_ids {
            entity::group_trainer::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }
}

/// Creates a group with default values for the given sport and semester.
///
/// Shorthand for `GroupFactory::new(db, sport_id, semester_id).build().await`.
pub async fn create_group(
    db: &DatabaseConnection,
    sport_id: i32,
    semester_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, sport_id, semester_id).build().await
}
