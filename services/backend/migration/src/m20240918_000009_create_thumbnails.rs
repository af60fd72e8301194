use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Thumbnails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Thumbnails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Thumbnails::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Thumbnails::Url).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Thumbnails::Description)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Thumbnails::UploadedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Thumbnails::Table, Thumbnails::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Thumbnails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Thumbnails {
    Table,
    Id,
    CourseId,
    Url,
    Description,
    UploadedDate,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
