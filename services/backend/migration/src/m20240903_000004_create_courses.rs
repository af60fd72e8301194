use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::CourseName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::Description).string_len(255).null())
                    .col(ColumnDef::new(Courses::ThumbnailUrl).string().null())
                    .col(
                        ColumnDef::new(Courses::Rating)
                            .double()
                            .null()
                            .check(Expr::col(Courses::Rating).between(0, 5)),
                    )
                    .col(ColumnDef::new(Courses::Categories).json().not_null())
                    .col(ColumnDef::new(Courses::Content).json().not_null())
                    .col(ColumnDef::new(Courses::Duration).integer().null())
                    .col(ColumnDef::new(Courses::Level).string_len(64).null())
                    .col(
                        ColumnDef::new(Courses::ReleasedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Courses::LastUpdate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::EnrollmentCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::Certification)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::DiscountOffers)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::Syllabus).string_len(2000).null())
                    .col(
                        ColumnDef::new(Courses::ProgressTracking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseResource)
                            .string_len(500)
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::Faqs).string_len(2000).null())
                    .col(
                        ColumnDef::new(Courses::AccessibilityFeatures)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::CoursePreview).string().null())
                    .col(
                        ColumnDef::new(Courses::InteractiveFeatures)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Courses::VideoQualityOption)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    CourseName,
    Description,
    ThumbnailUrl,
    Rating,
    Categories,
    Content,
    Duration,
    Level,
    ReleasedDate,
    LastUpdate,
    EnrollmentCount,
    Certification,
    DiscountOffers,
    Syllabus,
    ProgressTracking,
    CourseResource,
    Faqs,
    AccessibilityFeatures,
    CoursePreview,
    InteractiveFeatures,
    VideoQualityOption,
}
