//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a training group with its semester and sport dependencies.
///
/// This is a convenience method that creates:
/// 1. Semester (current as of today)
/// 2. Sport (visible, not special)
/// 3. Group (default capacity)
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((semester, sport, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::semester::Model,
        entity::sport::Model,
        entity::group::Model,
    ),
    DbErr,
> {
    let semester = crate::factory::semester::create_semester(db).await?;
    let sport = crate::factory::sport::create_sport(db).await?;
    let group = crate::factory::group::create_group(db, sport.id, semester.id).await?;

    Ok((semester, sport, group))
}
