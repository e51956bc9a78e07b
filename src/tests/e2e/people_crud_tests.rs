use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::people::adapters::outbound::store_in_memory::InMemoryPersonStore;
use crate::modules::people::core::person::Person;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::people::PersonBuilder;

fn app(store: InMemoryPersonStore) -> Router {
    router(AppState {
        store: Arc::new(store),
        request_timeout: Duration::from_secs(2),
    })
}

fn seeded_app() -> Router {
    app(InMemoryPersonStore::with_people(
        vec![
            PersonBuilder::new()
                .id(1)
                .first_name("Bob")
                .last_name("Barker")
                .age(53)
                .build(),
            PersonBuilder::new()
                .id(2)
                .first_name("Fred")
                .last_name("Flintstone")
                .age(44)
                .build(),
        ],
        Duration::ZERO,
    ))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn deletes_then_updates_through_the_router() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(Request::delete("/people/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"success": true}));

    let response = app
        .clone()
        .oneshot(Request::get("/people").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{"id": 1, "first_name": "Bob", "last_name": "Barker", "age": 53}])
    );

    let response = app
        .clone()
        .oneshot(
            Request::put("/people/1")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"first_name":"Bobby","last_name":"Barker","age":54}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/people/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 1, "first_name": "Bobby", "last_name": "Barker", "age": 54})
    );
}

#[tokio::test]
async fn creates_and_reads_back_a_person() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/people")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"first_name":"Joan","last_name":"Jet","age":49}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: Person = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.id, 3);

    let response = app
        .oneshot(Request::get("/people/3").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let read_back: Person = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(read_back, created);
}

#[tokio::test]
async fn rejects_a_create_that_collides_with_an_existing_id() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/people")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"id":2,"first_name":"Fred","last_name":"Flintstone","age":44}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(Request::get("/people").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let people = body_json(response).await;
    assert_eq!(people.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn times_out_against_a_slow_store() {
    let app = router(AppState {
        store: Arc::new(InMemoryPersonStore::new(Duration::from_millis(50))),
        request_timeout: Duration::from_millis(5),
    });

    let response = app
        .oneshot(Request::get("/people").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "deadline exceeded"})
    );
}
