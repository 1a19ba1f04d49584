use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_semester_table::Semester, m20260105_000002_create_sport_table::Sport,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_auto(Group::Id))
                    .col(string(Group::Name))
                    .col(integer(Group::SportId))
                    .col(integer(Group::SemesterId))
                    .col(integer(Group::Capacity).default(20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_sport_id")
                            .from(Group::Table, Group::SportId)
                            .to(Sport::Table, Sport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_semester_id")
                            .from(Group::Table, Group::SemesterId)
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
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    Table,
    Id,
    Name,
    SportId,
    SemesterId,
    Capacity,
}
