use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseAuthorLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseAuthorLinks::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseAuthorLinks::AuthorId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseAuthorLinks::CourseId)
                            .col(CourseAuthorLinks::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseAuthorLinks::Table, CourseAuthorLinks::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseAuthorLinks::Table, CourseAuthorLinks::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseAuthorLinks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseAuthorLinks {
    Table,
    CourseId,
    AuthorId,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
}
