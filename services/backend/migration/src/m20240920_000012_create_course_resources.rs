use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseResources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseResources::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseResources::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseResources::ChapterId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseResources::ResourceTypeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseResources::Title)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseResources::ResourceUrl)
                            .string_len(255)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseResources::Table, CourseResources::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseResources::Table, CourseResources::ChapterId)
                            .to(CourseChapters::Table, CourseChapters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // Types still in use cannot be removed.
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseResources::Table, CourseResources::ResourceTypeId)
                            .to(ResourceTypes::Table, ResourceTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseResources::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseResources {
    Table,
    Id,
    CourseId,
    ChapterId,
    ResourceTypeId,
    Title,
    ResourceUrl,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}

#[derive(Iden)]
enum CourseChapters {
    Table,
    Id,
}

#[derive(Iden)]
enum ResourceTypes {
    Table,
    Id,
}
