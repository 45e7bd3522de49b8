//! Tests for server wiring.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{Value, json};

use super::*;
use users_api::domain::TRACE_ID_HEADER;
use users_api::outbound::memory::InMemoryUserRepository;

fn states() -> (web::Data<HealthState>, web::Data<HttpState>) {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let http = web::Data::new(HttpState::for_repository(Arc::new(
        InMemoryUserRepository::new(),
    )));
    (health, http)
}

#[actix_web::test]
async fn create_server_binds_and_marks_ready() {
    let health = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        ("127.0.0.1".to_owned(), 0),
        Arc::new(InMemoryUserRepository::new()),
    );
    assert_eq!(config.bind_addr, ("127.0.0.1".to_owned(), 0));

    let server = create_server(&health, config).expect("server binds");

    assert!(health.is_ready());
    drop(server);
}

#[actix_web::test]
async fn app_serves_users_health_and_trace_header() {
    let (health, http) = states();
    let app = test::init_service(build_app(health, http)).await;

    let ready_res = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(ready_res.status(), StatusCode::OK);

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    assert!(created.headers().contains_key(TRACE_ID_HEADER));

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn malformed_json_is_unprocessable() {
    let (health, http) = states();
    let app = test::init_service(build_app(health, http)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[cfg(debug_assertions)]
#[actix_web::test]
async fn openapi_document_is_served_in_debug_builds() {
    let (health, http) = states();
    let app = test::init_service(build_app(health, http)).await;

    let doc: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request(),
    )
    .await;

    assert!(doc["paths"]["/users/{id}"].is_object());
}
