use sea_orm::entity::prelude::*;

use crate::json::{ContentBlocks, TextList};

/// Catalog course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_name: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Json")]
    pub categories: TextList,
    #[sea_orm(column_type = "Json")]
    pub content: ContentBlocks,
    pub duration: Option<i32>,
    pub level: Option<String>,
    pub released_date: Option<chrono::DateTime<chrono::Utc>>,
    pub last_update: chrono::DateTime<chrono::Utc>,
    pub enrollment_count: i32,
    pub certification: bool,
    pub discount_offers: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub syllabus: Option<String>,
    pub progress_tracking: bool,
    pub course_resource: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub faqs: Option<String>,
    pub accessibility_features: Option<String>,
    pub course_preview: Option<String>,
    pub interactive_features: Option<String>,
    pub video_quality_option: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_author_links::Entity")]
    CourseAuthorLinks,
    #[sea_orm(has_many = "super::prices::Entity")]
    Prices,
    #[sea_orm(has_many = "super::course_chapters::Entity")]
    CourseChapters,
    #[sea_orm(has_many = "super::thumbnails::Entity")]
    Thumbnails,
    #[sea_orm(has_many = "super::user_enrollments::Entity")]
    UserEnrollments,
    #[sea_orm(has_many = "super::course_resources::Entity")]
    CourseResources,
}

impl Related<super::course_author_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseAuthorLinks.def()
    }
}

impl Related<super::authors::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_author_links::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_author_links::Relation::Course.def().rev())
    }
}

impl Related<super::prices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prices.def()
    }
}

impl Related<super::course_chapters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseChapters.def()
    }
}

impl Related<super::thumbnails::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thumbnails.def()
    }
}

impl Related<super::user_enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserEnrollments.def()
    }
}

impl Related<super::course_resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseResources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
