//! Create `app_data` table.
//!
//! Holds the single schedule document as JSONB in the row with id 1.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppData::Table)
                    .if_not_exists()
                    .col(pk_auto(AppData::Id))
                    .col(json_binary(AppData::Data).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppData::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppData { Table, Id, Data }
