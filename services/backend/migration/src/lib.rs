use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users_and_items;
mod m20240901_000002_create_user_profiles;
mod m20240901_000003_create_contact_messages;
mod m20240903_000004_create_courses;
mod m20240903_000005_create_authors;
mod m20240903_000006_create_course_author_links;
mod m20240905_000007_create_prices;
mod m20240918_000008_create_course_chapters;
mod m20240918_000009_create_thumbnails;
mod m20240919_000010_create_user_enrollments;
mod m20240920_000011_create_resource_types;
mod m20240920_000012_create_course_resources;
mod m20240925_000013_add_missing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users_and_items::Migration),
            Box::new(m20240901_000002_create_user_profiles::Migration),
            Box::new(m20240901_000003_create_contact_messages::Migration),
            Box::new(m20240903_000004_create_courses::Migration),
            Box::new(m20240903_000005_create_authors::Migration),
            Box::new(m20240903_000006_create_course_author_links::Migration),
            Box::new(m20240905_000007_create_prices::Migration),
            Box::new(m20240918_000008_create_course_chapters::Migration),
            Box::new(m20240918_000009_create_thumbnails::Migration),
            Box::new(m20240919_000010_create_user_enrollments::Migration),
            Box::new(m20240920_000011_create_resource_types::Migration),
            Box::new(m20240920_000012_create_course_resources::Migration),
            Box::new(m20240925_000013_add_missing_indexes::Migration),
        ]
    }
}
