use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};
use uuid::Uuid;

use coursehub_backend_schema::{item, user};

use crate::helpers::test_db;

#[tokio::test]
async fn should_create_user_and_item_tables() {
    let db = test_db().await;

    let owner = user::ActiveModel {
        id: Set(Uuid::now_v7()),
        email: Set("owner@gmail.com".to_owned()),
        is_active: Set(true),
        is_superuser: Set(false),
        full_name: Set(None),
        hashed_password: Set("hashed".to_owned()),
    }
    .insert(&db)
    .await
    .unwrap();

    item::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("notebook".to_owned()),
        description: Set(None),
        owner_id: Set(owner.id),
    }
    .insert(&db)
    .await
    .unwrap();

    let items = owner.find_related(item::Entity).all(&db).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_user_email() {
    let db = test_db().await;
    let user = |id| user::ActiveModel {
        id: Set(id),
        email: Set("twice@gmail.com".to_owned()),
        is_active: Set(true),
        is_superuser: Set(false),
        full_name: Set(None),
        hashed_password: Set("hashed".to_owned()),
    };

    user(Uuid::now_v7()).insert(&db).await.unwrap();
    assert!(user(Uuid::now_v7()).insert(&db).await.is_err());
}

#[tokio::test]
async fn should_cascade_items_when_owner_is_deleted() {
    let db = test_db().await;

    let owner = user::ActiveModel {
        id: Set(Uuid::now_v7()),
        email: Set("gone@gmail.com".to_owned()),
        is_active: Set(true),
        is_superuser: Set(false),
        full_name: Set(Some("Gone".to_owned())),
        hashed_password: Set("hashed".to_owned()),
    }
    .insert(&db)
    .await
    .unwrap();
    item::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("lamp".to_owned()),
        description: Set(Some("desk".to_owned())),
        owner_id: Set(owner.id),
    }
    .insert(&db)
    .await
    .unwrap();

    user::Entity::delete_by_id(owner.id).exec(&db).await.unwrap();

    assert_eq!(item::Entity::find().count(&db).await.unwrap(), 0);
}
