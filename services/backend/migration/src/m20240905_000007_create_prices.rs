use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prices::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Prices::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Prices::Amount)
                            .decimal_len(12, 2)
                            .not_null()
                            .check(Expr::col(Prices::Amount).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Prices::Currency)
                            .string_len(3)
                            .not_null()
                            .default("USD"),
                    )
                    .col(
                        ColumnDef::new(Prices::Discount)
                            .small_integer()
                            .null()
                            .check(Expr::col(Prices::Discount).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(Prices::StartDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Prices::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Prices::Description).string_len(255).null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prices::Table, Prices::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Prices {
    Table,
    Id,
    CourseId,
    Amount,
    Currency,
    Discount,
    StartDate,
    EndDate,
    Description,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
