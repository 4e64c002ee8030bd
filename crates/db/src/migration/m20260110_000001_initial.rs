//! Initial schema: project budget, labour roster, expenses.
//!
//! Built with the schema builder so the same migration runs on Postgres and SQLite.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectBudget::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectBudget::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectBudget::TotalBudgetPaise)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(ProjectBudget::TotalBudgetPaise).gt(0)),
                    )
                    .col(
                        ColumnDef::new(ProjectBudget::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectBudget::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Labour::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Labour::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Labour::Name).string().not_null())
                    .col(
                        ColumnDef::new(Labour::DailyWagePaise)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Labour::DailyWagePaise).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Labour::IsPresent)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Labour::TotalPayPaise)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Labour::TotalPayPaise).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Labour::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Labour::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_labour_name")
                    .table(Labour::Table)
                    .col(Labour::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::AmountPaise)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Expenses::AmountPaise).gt(0)),
                    )
                    .col(ColumnDef::new(Expenses::ExpenseDate).date().not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_date")
                    .table(Expenses::Table)
                    .col(Expenses::ExpenseDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Labour::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProjectBudget::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProjectBudget {
    Table,
    Id,
    TotalBudgetPaise,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Labour {
    Table,
    Id,
    Name,
    DailyWagePaise,
    IsPresent,
    TotalPayPaise,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    Category,
    AmountPaise,
    ExpenseDate,
    CreatedAt,
}
