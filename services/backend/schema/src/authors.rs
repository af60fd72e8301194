use sea_orm::entity::prelude::*;

use crate::json::TextList;

/// Course author. Linked to courses through `course_author_links`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub expertise: TextList,
    pub qualification: Option<String>,
    pub experience_years: Option<i32>,
    #[sea_orm(column_type = "Json")]
    pub certifications: TextList,
    pub location: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub languages: TextList,
    pub contact_number: Option<String>,
    pub join_date: chrono::DateTime<chrono::Utc>,
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_author_links::Entity")]
    CourseAuthorLinks,
}

impl Related<super::course_author_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseAuthorLinks.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_author_links::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_author_links::Relation::Author.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
