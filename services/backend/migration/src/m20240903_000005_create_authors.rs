use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Authors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Authors::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Authors::Bio).string_len(256).null())
                    .col(ColumnDef::new(Authors::Email).string_len(256).null())
                    .col(ColumnDef::new(Authors::Website).string_len(256).null())
                    .col(ColumnDef::new(Authors::Expertise).json().not_null())
                    .col(
                        ColumnDef::new(Authors::Qualification)
                            .string_len(256)
                            .null(),
                    )
                    .col(ColumnDef::new(Authors::ExperienceYears).integer().null())
                    .col(ColumnDef::new(Authors::Certifications).json().not_null())
                    .col(ColumnDef::new(Authors::Location).string_len(32).null())
                    .col(ColumnDef::new(Authors::Languages).json().not_null())
                    .col(ColumnDef::new(Authors::ContactNumber).string_len(12).null())
                    .col(
                        ColumnDef::new(Authors::JoinDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Authors::LastActive)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    Name,
    Bio,
    Email,
    Website,
    Expertise,
    Qualification,
    ExperienceYears,
    Certifications,
    Location,
    Languages,
    ContactNumber,
    JoinDate,
    LastActive,
}
