use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserEnrollments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserEnrollments::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserEnrollments::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserEnrollments::EnrollmentDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserEnrollments::Status)
                            .string_len(64)
                            .not_null()
                            .default("active"),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserEnrollments::UserId)
                            .col(UserEnrollments::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserEnrollments::Table, UserEnrollments::UserId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserEnrollments::Table, UserEnrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserEnrollments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserEnrollments {
    Table,
    UserId,
    CourseId,
    EnrollmentDate,
    Status,
}

#[derive(Iden)]
enum UserProfiles {
    Table,
    Id,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
