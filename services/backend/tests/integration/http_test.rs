use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{Value, json};
use uuid::Uuid;

use coursehub_backend_schema::{
    course_author_links, course_chapters, course_resources, prices, thumbnails, user_enrollments,
};

use crate::helpers::{test_server, test_server_with_db};

const EMAIL: &str = "ada@gmail.com";

async fn sign_up(server: &TestServer, email: &str) -> Value {
    let response = server
        .post("/sign_up")
        .json(&json!({
            "full_name": " Ada Lovelace ",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "phone_number": "+441234567",
            "password": "analytical",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn create_course(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/courses")
        .json(&json!({
            "course_name": name,
            "rating": 4.5,
            "categories": ["systems", " "],
            "content": [{"week 1": "ownership"}],
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_str()
        .expect("course id")
        .to_owned()
}

async fn enrollment_count(server: &TestServer, course_id: &str) -> i64 {
    let response = server.get(&format!("/courses/{course_id}")).await;
    response.assert_status_ok();
    response.json::<Value>()["enrollment_count"]
        .as_i64()
        .expect("enrollment_count")
}

#[tokio::test]
async fn should_report_health_and_readiness() {
    let server = test_server().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_register_and_fetch_profile() {
    let server = test_server().await;
    let created = sign_up(&server, EMAIL).await;

    assert_eq!(created["full_name"], "Ada Lovelace");
    assert_eq!(created["email"], EMAIL);
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let response = server.get(&format!("/{EMAIL}")).await;
    response.assert_status_ok();
    let fetched: Value = response.json();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["full_name"], "Ada Lovelace");
    assert_eq!(fetched["last_name"], "Lovelace");
    assert_eq!(fetched["phone_number"], "+441234567");
}

#[tokio::test]
async fn should_return_conflict_for_duplicate_sign_up() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;

    let response = server
        .post("/sign_up")
        .json(&json!({
            "full_name": "Someone Else",
            "email": EMAIL,
            "password": "different",
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "PROFILE_ALREADY_EXISTS");
}

#[tokio::test]
async fn should_treat_email_domain_case_as_same_profile() {
    let server = test_server().await;
    sign_up(&server, "a@gmail.com").await;

    let response = server
        .post("/sign_up")
        .json(&json!({
            "full_name": "Same Mailbox",
            "email": "a@GMAIL.com",
            "password": "different",
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "PROFILE_ALREADY_EXISTS");

    server.get("/a@GMail.com").await.assert_status_ok();
}

#[tokio::test]
async fn should_reject_email_with_two_at_signs() {
    let server = test_server().await;
    let response = server
        .post("/sign_up")
        .json(&json!({
            "full_name": "Mallory",
            "email": "a@evil.com@gmail.com",
            "password": "analytical",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_INPUT");
}

#[tokio::test]
async fn should_reject_sign_up_outside_email_domain() {
    let server = test_server().await;
    let response = server
        .post("/sign_up")
        .json(&json!({
            "full_name": "Ada Lovelace",
            "email": "ada@yahoo.com",
            "password": "analytical",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_INPUT");
}

#[tokio::test]
async fn should_sign_in_only_with_correct_password() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;

    let ok = server
        .post("/sign_in")
        .json(&json!({"email": EMAIL, "password": "analytical"}))
        .await;
    ok.assert_status_ok();
    let body: Value = ok.json();
    assert_eq!(body["message"], "Successfully signed in");
    assert_eq!(body["profile"]["email"], EMAIL);

    let wrong = server
        .post("/sign_in")
        .json(&json!({"email": EMAIL, "password": "Analytical"}))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json::<Value>()["kind"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn should_reject_update_without_names_and_keep_row() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;

    let response = server
        .put(&format!("/{EMAIL}"))
        .json(&json!({"phone_number": "+15550100"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "MISSING_DATA");

    let fetched: Value = server.get(&format!("/{EMAIL}")).await.json();
    assert_eq!(fetched["phone_number"], "+441234567");
}

#[tokio::test]
async fn should_update_names_and_password() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;

    let response = server
        .put(&format!("/{EMAIL}"))
        .json(&json!({"full_name": "Augusta Ada King", "password": "notes-g"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["full_name"], "Augusta Ada King");

    server
        .post("/sign_in")
        .json(&json!({"email": EMAIL, "password": "notes-g"}))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn should_delete_profile_with_its_messages() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;
    sign_up(&server, "grace@gmail.com").await;

    for email in [EMAIL, "grace@gmail.com"] {
        server
            .post("/contactus")
            .json(&json!({"email": email, "message": "Is there a certificate?"}))
            .await
            .assert_status(StatusCode::CREATED);
    }
    let listed: Vec<Value> = server.get("/contactus").await.json();
    assert_eq!(listed.len(), 2);

    server
        .delete(&format!("/{EMAIL}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed: Vec<Value> = server.get("/contactus").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["email"], "grace@gmail.com");
    server
        .get(&format!("/{EMAIL}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_keep_enrollment_count_in_step() {
    let server = test_server().await;
    sign_up(&server, EMAIL).await;
    let course_id = create_course(&server, "Rust for Systems").await;

    let response = server
        .post(&format!("/{EMAIL}/enrollments"))
        .json(&json!({"course_id": course_id}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["status"], "active");
    assert_eq!(enrollment_count(&server, &course_id).await, 1);

    server
        .post(&format!("/{EMAIL}/enrollments"))
        .json(&json!({"course_id": course_id}))
        .await
        .assert_status(StatusCode::CONFLICT);
    assert_eq!(enrollment_count(&server, &course_id).await, 1);

    let response = server
        .put(&format!("/{EMAIL}/enrollments/{course_id}"))
        .json(&json!({"status": "completed"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "completed");

    server
        .delete(&format!("/{EMAIL}/enrollments/{course_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert_eq!(enrollment_count(&server, &course_id).await, 0);

    server
        .post(&format!("/{EMAIL}/enrollments"))
        .json(&json!({"course_id": course_id}))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .delete(&format!("/{EMAIL}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert_eq!(enrollment_count(&server, &course_id).await, 0);
}

#[tokio::test]
async fn should_remove_course_children_on_course_delete() {
    let (server, db) = test_server_with_db().await;
    sign_up(&server, EMAIL).await;
    let course_id = create_course(&server, "Databases").await;
    let course_uuid: Uuid = course_id.parse().expect("course uuid");

    let author: Value = server
        .post("/authors")
        .json(&json!({"name": "Edgar Codd", "languages": ["en"]}))
        .await
        .json();
    let author_id = author["id"].as_str().expect("author id").to_owned();
    server
        .put(&format!("/courses/{course_id}/authors/{author_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let price = server
        .post(&format!("/courses/{course_id}/prices"))
        .json(&json!({"amount": "19.99", "currency": "usd"}))
        .await;
    price.assert_status(StatusCode::CREATED);
    let price: Value = price.json();
    assert_eq!(price["amount"], "19.99");
    assert_eq!(price["currency"], "USD");
    let listed: Value = server
        .get(&format!("/courses/{course_id}/prices"))
        .await
        .json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let chapter: Value = server
        .post(&format!("/courses/{course_id}/chapters"))
        .json(&json!({"title": "Relational algebra", "order": 1}))
        .await
        .json();
    let chapter_id = chapter["id"].as_str().expect("chapter id").to_owned();

    let resource_type: Value = server
        .post("/resource-types")
        .json(&json!({"type_name": "video"}))
        .await
        .json();
    let resource = server
        .post(&format!("/chapters/{chapter_id}/resources"))
        .json(&json!({
            "title": "Lecture 1",
            "resource_url": "https://example.com/l1.mp4",
            "resource_type_id": resource_type["id"],
        }))
        .await;
    resource.assert_status(StatusCode::CREATED);
    assert_eq!(resource.json::<Value>()["course_id"], course_id.as_str());

    let thumbnail: Value = server
        .post(&format!("/courses/{course_id}/thumbnails"))
        .json(&json!({"url": "https://example.com/cover.png"}))
        .await
        .json();

    server
        .post(&format!("/{EMAIL}/enrollments"))
        .json(&json!({"course_id": course_id}))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/courses/{course_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/courses/{course_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!(
            "/prices/{}",
            price["id"].as_str().expect("price id")
        ))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!(
            "/thumbnails/{}",
            thumbnail["id"].as_str().expect("thumbnail id")
        ))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let enrollments = server.get(&format!("/{EMAIL}/enrollments")).await;
    enrollments.assert_status_ok();
    assert_eq!(enrollments.json::<Value>(), json!([]));
    server
        .get(&format!("/authors/{author_id}"))
        .await
        .assert_status_ok();

    let links = course_author_links::Entity::find()
        .filter(course_author_links::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    let price_rows = prices::Entity::find()
        .filter(prices::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    let chapter_rows = course_chapters::Entity::find()
        .filter(course_chapters::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    let resource_rows = course_resources::Entity::find()
        .filter(course_resources::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    let thumbnail_rows = thumbnails::Entity::find()
        .filter(thumbnails::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    let enrollment_rows = user_enrollments::Entity::find()
        .filter(user_enrollments::Column::CourseId.eq(course_uuid))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(
        (
            links,
            price_rows,
            chapter_rows,
            resource_rows,
            thumbnail_rows,
            enrollment_rows
        ),
        (0, 0, 0, 0, 0, 0)
    );
}

#[tokio::test]
async fn should_refuse_deleting_resource_type_in_use() {
    let server = test_server().await;
    let course_id = create_course(&server, "Compilers").await;
    let chapter: Value = server
        .post(&format!("/courses/{course_id}/chapters"))
        .json(&json!({"title": "Parsing"}))
        .await
        .json();
    let resource_type: Value = server
        .post("/resource-types")
        .json(&json!({"type_name": "pdf"}))
        .await
        .json();
    let type_id = resource_type["id"].as_str().expect("type id").to_owned();
    let resource: Value = server
        .post(&format!(
            "/chapters/{}/resources",
            chapter["id"].as_str().expect("chapter id")
        ))
        .json(&json!({"title": "Dragon book notes", "resource_type_id": type_id}))
        .await
        .json();

    let response = server.delete(&format!("/resource-types/{type_id}")).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "RESOURCE_TYPE_IN_USE");

    server
        .delete(&format!(
            "/resources/{}",
            resource["id"].as_str().expect("resource id")
        ))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/resource-types/{type_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_sort_courses_by_name() {
    let server = test_server().await;
    for name in ["Networking", "Algorithms", "Operating Systems"] {
        create_course(&server, name).await;
    }

    let courses: Vec<Value> = server
        .get("/courses")
        .add_query_param("sort-by", "course-name-asc")
        .await
        .json();
    let names: Vec<&str> = courses
        .iter()
        .filter_map(|c| c["course_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Algorithms", "Networking", "Operating Systems"]);

    let first_page: Vec<Value> = server
        .get("/courses")
        .add_query_param("sort-by", "course-name-asc")
        .add_query_param("per-page", 2)
        .await
        .json();
    assert_eq!(first_page.len(), 2);
}

#[tokio::test]
async fn should_link_author_once() {
    let server = test_server().await;
    let course_id = create_course(&server, "Type Theory").await;
    let author: Value = server
        .post("/authors")
        .json(&json!({"name": "Per Martin-Löf"}))
        .await
        .json();
    let author_id = author["id"].as_str().expect("author id");
    let link = format!("/courses/{course_id}/authors/{author_id}");

    server.put(&link).await.assert_status(StatusCode::NO_CONTENT);
    let response = server.put(&link).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "AUTHOR_ALREADY_LINKED");

    let authors: Vec<Value> = server
        .get(&format!("/courses/{course_id}/authors"))
        .await
        .json();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "Per Martin-Löf");

    server.delete(&link).await.assert_status(StatusCode::NO_CONTENT);
    let response = server.delete(&link).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "AUTHOR_LINK_NOT_FOUND");
}
