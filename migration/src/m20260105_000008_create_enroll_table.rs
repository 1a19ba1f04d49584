use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_group_table::Group, m20260105_000007_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enroll::Table)
                    .if_not_exists()
                    .col(pk_auto(Enroll::Id))
                    .col(integer(Enroll::StudentId))
                    .col(integer(Enroll::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enroll_student_id")
                            .from(Enroll::Table, Enroll::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enroll_group_id")
                            .from(Enroll::Table, Enroll::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enroll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enroll {
    Table,
    Id,
    StudentId,
    GroupId,
}
