use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(integer_uniq(Trainer::UserId))
                    .col(string(Trainer::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    Table,
    Id,
    UserId,
    Name,
}
