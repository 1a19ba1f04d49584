use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_semester_table::Semester;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FitnessTestExercise::Table)
                    .if_not_exists()
                    .col(pk_auto(FitnessTestExercise::Id))
                    .col(integer(FitnessTestExercise::SemesterId))
                    .col(string(FitnessTestExercise::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fitness_test_exercise_semester_id")
                            .from(FitnessTestExercise::Table, FitnessTestExercise::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FitnessTestExercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FitnessTestExercise {
    Table,
    Id,
    SemesterId,
    Name,
}
