use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupAllowedMedicalGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupAllowedMedicalGroup::Id))
                    .col(integer(GroupAllowedMedicalGroup::GroupId))
                    .col(integer(GroupAllowedMedicalGroup::MedicalGroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_allowed_medical_group_group_id")
                            .from(
                                GroupAllowedMedicalGroup::Table,
                                GroupAllowedMedicalGroup::GroupId,
                            )
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
            .drop_table(
                Table::drop()
                    .table(GroupAllowedMedicalGroup::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupAllowedMedicalGroup {
    Table,
    Id,
    GroupId,
    MedicalGroupId,
}
