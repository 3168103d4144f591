//! HTTP tests for `/api/v1/admin`

mod common;

use actix_web::test;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{bearer, Fixture};

#[actix_web::test]
async fn test_admin_creates_user() {
    let fx = Fixture::new();
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({
            "first_name": "Ada",
            "last_name": "Admin",
            "email": "ada@example.com",
            "password": "secret123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    assert!(fx.state.facade.get_user(id).await.unwrap().is_admin);
}

#[actix_web::test]
async fn test_admin_endpoints_reject_regular_users() {
    let fx = Fixture::new();
    let john = fx.user("John", "john@example.com").await;
    let token = fx.token_for(&john);
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/amenities")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Sauna" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Admin privileges required");

    // Privilege is checked before the id is even looked at
    for uri in [
        format!("/api/v1/admin/users/{}", Uuid::new_v4()),
        "/api/v1/admin/users/not-a-uuid".to_string(),
    ] {
        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(bearer(&token))
            .set_json(json!({ "first_name": "Mallory" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/amenities")
        .set_json(json!({ "name": "Sauna" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_privilege_checked_before_body() {
    let fx = Fixture::new();
    let john = fx.user("John", "john@example.com").await;
    let token = fx.token_for(&john);
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/amenities")
        .insert_header(bearer(&token))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/admin/users/{}", john.id))
        .insert_header(bearer(&token))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"is_admin\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/users")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // An admin with the same body gets the payload error
    let req = test::TestRequest::post()
        .uri("/api/v1/admin/amenities")
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid input data");
}

#[actix_web::test]
async fn test_admin_updates_credentials() {
    let fx = Fixture::new();
    let john = fx.user("John", "john@example.com").await;
    fx.user("Jane", "jane@example.com").await;
    let app = test::init_service(fx.app()).await;
    let uri = format!("/api/v1/admin/users/{}", john.id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({ "email": "jane@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email is already in use");

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({ "email": "johnny@example.com", "password": "rotated" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "johnny@example.com");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "johnny@example.com", "password": "rotated" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_admin_manages_amenities() {
    let fx = Fixture::new();
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/amenities")
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({ "name": "Sauna" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    let uri = format!("/api/v1/admin/amenities/{}", body["id"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({ "name": "Steam room" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Amenity updated successfully");

    let amenities = fx.state.facade.list_amenities().await.unwrap();
    assert_eq!(amenities[0].name, "Steam room");
}
