use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseChapters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseChapters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseChapters::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseChapters::Title)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseChapters::Content).text().null())
                    .col(ColumnDef::new(CourseChapters::Position).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseChapters::Table, CourseChapters::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseChapters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseChapters {
    Table,
    Id,
    CourseId,
    Title,
    Content,
    Position,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
