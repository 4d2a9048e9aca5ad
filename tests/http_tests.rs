mod test_utils;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use auth_forms::routes::configure_routes;
use test_utils::*;

#[actix_rt::test]
async fn home_reports_service_name() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Welcome to Auth-Forms-Test!");
    assert_eq!(body["status"], "Ok");
}

#[actix_rt::test]
async fn health_check_is_ok() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["status", "uptime", "version"]);
}

#[actix_rt::test]
async fn validate_endpoint_lists_failing_fields() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/forms/validate")
        .set_json(json!({
            "values": {"email": "bad", "password": "short"},
            "mode": "sign_in"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"], json!({
        "email": "Please enter a valid email address",
        "password": "Password must be at least 8 characters"
    }));
}

#[actix_rt::test]
async fn validate_endpoint_accepts_valid_sign_up() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/forms/validate")
        .set_json(json!({"values": valid_sign_up(), "mode": "sign_up"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({"valid": true, "errors": {}}));
}

#[actix_rt::test]
async fn submit_rejects_invalid_form_with_details() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/forms/submit")
        .set_json(json!({"values": {}, "mode": "sign_up"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "password", "confirmPassword"]);
}

#[actix_rt::test]
async fn submit_accepts_valid_sign_in() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/forms/submit")
        .set_json(json!({"values": valid_sign_in(), "mode": "sign_in"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn strength_endpoint_scores_password() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/password/strength")
        .set_json(json!({"password": "abcdefghijkl"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"], 3);
    assert_eq!(body["label"], "Medium");
    assert_eq!(body["tier"], "medium");
    assert_eq!(body["percent"], 50.0);
    assert_eq!(body["visible"], true);
}

#[actix_rt::test]
async fn strength_endpoint_hides_empty_password() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/password/strength")
        .set_json(json!({"password": ""}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["label"], "");
    assert_eq!(body["tier"], "none");
    assert_eq!(body["visible"], false);
}

#[actix_rt::test]
async fn strength_endpoint_rejects_oversized_password() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/password/strength")
        .set_json(json!({"password": "x".repeat(2000)}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn malformed_json_gets_json_error() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/forms/validate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}
