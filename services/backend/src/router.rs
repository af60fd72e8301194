use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;

use coursehub_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    author::{create_author, delete_author, get_author, list_authors, update_author},
    chapter::{create_chapter, delete_chapter, list_chapters, update_chapter},
    contact::{list_contact_messages, send_contact_message},
    course::{
        create_course, delete_course, get_course, link_author, list_course_authors, list_courses,
        unlink_author, update_course,
    },
    enrollment::{enroll, list_enrollments, unenroll, update_enrollment},
    health::{healthz, readyz},
    price::{create_price, delete_price, list_prices},
    profile::{delete_profile, get_profile, sign_in, sign_up, update_profile},
    resource::{
        create_resource, create_resource_type, delete_resource, delete_resource_type,
        list_resource_types, list_resources,
    },
    thumbnail::{create_thumbnail, delete_thumbnail, list_thumbnails},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Contact
        .route(
            "/contactus",
            post(send_contact_message).get(list_contact_messages),
        )
        // Courses
        .route("/courses", post(create_course).get(list_courses))
        .route(
            "/courses/{course_id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/courses/{course_id}/authors", get(list_course_authors))
        .route(
            "/courses/{course_id}/authors/{author_id}",
            put(link_author).delete(unlink_author),
        )
        .route(
            "/courses/{course_id}/prices",
            post(create_price).get(list_prices),
        )
        .route(
            "/courses/{course_id}/chapters",
            post(create_chapter).get(list_chapters),
        )
        .route(
            "/courses/{course_id}/thumbnails",
            post(create_thumbnail).get(list_thumbnails),
        )
        // Course children by id
        .route("/prices/{price_id}", delete(delete_price))
        .route(
            "/chapters/{chapter_id}",
            put(update_chapter).delete(delete_chapter),
        )
        .route(
            "/chapters/{chapter_id}/resources",
            post(create_resource).get(list_resources),
        )
        .route("/resources/{resource_id}", delete(delete_resource))
        .route("/thumbnails/{thumbnail_id}", delete(delete_thumbnail))
        // Authors
        .route("/authors", post(create_author).get(list_authors))
        .route(
            "/authors/{author_id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        // Resource types
        .route(
            "/resource-types",
            post(create_resource_type).get(list_resource_types),
        )
        .route(
            "/resource-types/{resource_type_id}",
            delete(delete_resource_type),
        )
        // Profiles. Static routes above take priority over `/{email}`.
        .route("/sign_up", post(sign_up))
        .route("/sign_in", post(sign_in))
        .route(
            "/{email}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route(
            "/{email}/enrollments",
            post(enroll).get(list_enrollments),
        )
        .route(
            "/{email}/enrollments/{course_id}",
            put(update_enrollment).delete(unenroll),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
