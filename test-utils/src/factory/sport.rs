//! Sport factory for creating test sport entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::sport::SportFactory;
///
/// let sport = SportFactory::new(&db)
///     .name("Swimming")
///     .special(true)
///     .build()
///     .await?;
/// ```
pub struct SportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    special: bool,
    visible: bool,
}

impl<'a> SportFactory<'a> {
    /// Creates a new SportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sport {id}"` where id is auto-incremented
    /// - special: `false`
    /// - visible: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sport {}", id),
            special: false,
            visible: true,
        }
    }

    /// Sets the sport name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the special flag (special sports are hidden from default listings).
    pub fn special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    /// Sets the visibility flag.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Builds and inserts the sport entity into the database.
    pub async fn build(self) -> Result<entity::sport::Model, DbErr> {
        entity::sport::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            special: ActiveValue::Set(self.special),
            visible: ActiveValue::Set(self.visible),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible, non-special sport with default values.
///
/// Shorthand for `SportFactory::new(db).build().await`.
pub async fn create_sport(db: &DatabaseConnection) -> Result<entity::sport::Model, DbErr> {
    SportFactory::new(db).build().await
}
