use sea_orm::entity::prelude::*;

/// Registered profile. Owns contact messages and enrollments.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contact_messages::Entity")]
    ContactMessages,
    #[sea_orm(has_many = "super::user_enrollments::Entity")]
    UserEnrollments,
}

impl Related<super::contact_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactMessages.def()
    }
}

impl Related<super::user_enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserEnrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
