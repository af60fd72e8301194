use sea_orm::entity::prelude::*;

/// Downloadable or linked material attached to a chapter.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub chapter_id: Uuid,
    pub resource_type_id: Uuid,
    pub title: String,
    pub resource_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course_chapters::Entity",
        from = "Column::ChapterId",
        to = "super::course_chapters::Column::Id",
        on_delete = "Cascade"
    )]
    CourseChapter,
    #[sea_orm(
        belongs_to = "super::resource_types::Entity",
        from = "Column::ResourceTypeId",
        to = "super::resource_types::Column::Id",
        on_delete = "Restrict"
    )]
    ResourceType,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_chapters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseChapter.def()
    }
}

impl Related<super::resource_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
