//! sea-orm entities for the coursehub backend tables.

pub mod authors;
pub mod contact_messages;
pub mod course_author_links;
pub mod course_chapters;
pub mod course_resources;
pub mod courses;
pub mod item;
pub mod json;
pub mod prices;
pub mod resource_types;
pub mod thumbnails;
pub mod user;
pub mod user_enrollments;
pub mod user_profiles;
