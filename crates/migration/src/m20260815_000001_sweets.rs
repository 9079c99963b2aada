//! Initial schema migration - creates the inventory table.
//!
//! - `sweets`: the shop inventory, one row per sweet

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Sweets {
    Table,
    Id,
    Name,
    Category,
    PriceCents,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sweets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sweets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sweets::Name).string().not_null())
                    .col(ColumnDef::new(Sweets::Category).string().not_null())
                    .col(
                        ColumnDef::new(Sweets::PriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sweets::Quantity)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Sweets::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Sweets::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sweets-category")
                    .table(Sweets::Table)
                    .col(Sweets::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sweets::Table).to_owned())
            .await?;

        Ok(())
    }
}
