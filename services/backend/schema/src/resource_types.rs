use sea_orm::entity::prelude::*;

/// Kind of course resource (video, slides, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub type_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_resources::Entity")]
    CourseResources,
}

impl Related<super::course_resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseResources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
