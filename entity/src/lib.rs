//! SeaORM entity models for the sports-enrollment domain.
//!
//! Each module maps one relational table. Set-valued and many-to-many
//! attributes (allowed medical groups, trainer assignments) are modelled as
//! join tables with their own entities.

pub mod enroll;
pub mod fitness_test_exercise;
pub mod group;
pub mod group_allowed_medical_group;
pub mod group_trainer;
pub mod semester;
pub mod sport;
pub mod student;
pub mod trainer;

pub mod prelude;
