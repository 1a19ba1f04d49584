pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_semester_table;
mod m20260105_000002_create_sport_table;
mod m20260105_000003_create_group_table;
mod m20260105_000004_create_group_allowed_medical_group_table;
mod m20260105_000005_create_trainer_table;
mod m20260105_000006_create_group_trainer_table;
mod m20260105_000007_create_student_table;
mod m20260105_000008_create_enroll_table;
mod m20260106_000009_create_fitness_test_exercise_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_semester_table::Migration),
            Box::new(m20260105_000002_create_sport_table::Migration),
            Box::new(m20260105_000003_create_group_table::Migration),
            Box::new(m20260105_000004_create_group_allowed_medical_group_table::Migration),
            Box::new(m20260105_000005_create_trainer_table::Migration),
            Box::new(m20260105_000006_create_group_trainer_table::Migration),
            Box::new(m20260105_000007_create_student_table::Migration),
            Box::new(m20260105_000008_create_enroll_table::Migration),
            Box::new(m20260106_000009_create_fitness_test_exercise_table::Migration),
        ]
    }
}
