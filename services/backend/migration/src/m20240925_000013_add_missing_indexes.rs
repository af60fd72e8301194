use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `(index name, table, column)` for every foreign key column used in lookups.
const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_prices_course_id", "prices", "course_id"),
    ("idx_course_chapters_course_id", "course_chapters", "course_id"),
    ("idx_thumbnails_course_id", "thumbnails", "course_id"),
    ("idx_user_enrollments_course_id", "user_enrollments", "course_id"),
    ("idx_course_resources_chapter_id", "course_resources", "chapter_id"),
    ("idx_course_resources_course_id", "course_resources", "course_id"),
    (
        "idx_course_author_links_author_id",
        "course_author_links",
        "author_id",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(*name)
                        .table(Alias::new(*table))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
