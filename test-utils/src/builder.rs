use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Semester, Sport};
///
/// let test = TestBuilder::new()
///     .with_table(Semester)
///     .with_table(Sport)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder and executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for enrollment queries.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Semester
    /// - Sport
    /// - Group
    /// - GroupAllowedMedicalGroup
    /// - Trainer
    /// - GroupTrainer
    /// - Student
    /// - Enroll
    ///
    /// For tests involving fitness-test exercises, use
    /// `with_fitness_test_tables()`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_enrollment_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_enrollment_tables(self) -> Self {
        self.with_table(Semester)
            .with_table(Sport)
            .with_table(Group)
            .with_table(GroupAllowedMedicalGroup)
            .with_table(Trainer)
            .with_table(GroupTrainer)
            .with_table(Student)
            .with_table(Enroll)
    }

    /// Adds all enrollment tables plus the fitness-test exercise table.
    ///
    /// Equivalent to `with_enrollment_tables()` followed by
    /// `with_table(FitnessTestExercise)`.
    pub fn with_fitness_test_tables(self) -> Self {
        self.with_enrollment_tables()
            .with_table(FitnessTestExercise)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
