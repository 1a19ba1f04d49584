//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Factories automatically
//! handle foreign key relationships, making tests more concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults (semester is current by default)
//!     let semester = factory::semester::create_semester(&db).await?;
//!     let sport = factory::sport::create_sport(&db).await?;
//!
//!     // Create a group with its dependencies in one call
//!     let (semester, sport, group) =
//!         factory::helpers::create_group_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let group = factory::group::GroupFactory::new(&db, sport.id, semester.id)
//!     .capacity(10)
//!     .allowed_medical_groups(vec![1, 2])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `semester` - Create semester entities
//! - `sport` - Create sport entities
//! - `group` - Create training group entities with medical-group and trainer
//!   assignments
//! - `student` - Create student entities
//! - `trainer` - Create trainer entities
//! - `enroll` - Create enrollment rows
//! - `fitness_test_exercise` - Create fitness-test exercise entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod enroll;
pub mod fitness_test_exercise;
pub mod group;
pub mod helpers;
pub mod semester;
pub mod sport;
pub mod student;
pub mod trainer;

// Re-export commonly used factory functions for concise usage
pub use enroll::create_enroll;
pub use fitness_test_exercise::create_exercise;
pub use group::create_group;
pub use semester::{create_semester, create_semester_with_dates};
pub use sport::create_sport;
pub use student::{create_student, create_student_with_medical_group};
pub use trainer::{create_trainer, create_trainer_with_user_id};
