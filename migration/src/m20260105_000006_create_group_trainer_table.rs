use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on UserId: trainer assignments reference user
        // accounts, which may lack a trainer record. Such assignments are
        // dropped at query time instead of being rejected here.
        manager
            .create_table(
                Table::create()
                    .table(GroupTrainer::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupTrainer::Id))
                    .col(integer(GroupTrainer::GroupId))
                    .col(integer(GroupTrainer::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_trainer_group_id")
                            .from(GroupTrainer::Table, GroupTrainer::GroupId)
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
            .drop_table(Table::drop().table(GroupTrainer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupTrainer {
    Table,
    Id,
    GroupId,
    UserId,
}
