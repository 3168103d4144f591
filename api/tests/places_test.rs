//! HTTP tests for `/api/v1/places`, amenity attachment and the cascading delete

mod common;

use actix_web::test;
use serde_json::{json, Value};

use hb_core::domain::value_objects::{AmenityInput, CreateReviewInput};
use hb_core::Actor;

use common::{bearer, Fixture};

fn place_body(owner: uuid::Uuid, latitude: f64) -> Value {
    json!({
        "title": "Cozy Apartment",
        "description": "Near the park",
        "price": 120.0,
        "latitude": latitude,
        "longitude": -122.41,
        "owner": owner
    })
}

#[actix_web::test]
async fn test_create_place() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&fx.token_for(&owner)))
        .set_json(place_body(owner.id, 37.77))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Cozy Apartment");
    assert_eq!(body["owner"], owner.id.to_string());
}

#[actix_web::test]
async fn test_create_place_rejects_bad_latitude() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&fx.token_for(&owner)))
        .set_json(place_body(owner.id, 100.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Latitude"));
    assert!(fx.state.facade.list_places().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_place_for_someone_else() {
    let fx = Fixture::new();
    let john = fx.user("John", "john@example.com").await;
    let jane = fx.user("Jane", "jane@example.com").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&fx.token_for(&john)))
        .set_json(place_body(jane.id, 37.77))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .set_json(place_body(jane.id, 37.77))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_anonymous_caller_rejected_before_body() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .set_json(json!({ "title": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/places/{}", place.id))
        .set_json(json!({ "price": "free" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Authenticated, the same partial body is a payload error
    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&fx.token_for(&owner)))
        .set_json(json!({ "title": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid input data");
}

#[actix_web::test]
async fn test_place_details_inline_owner_and_amenities() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let wifi = fx
        .state
        .facade
        .create_amenity(AmenityInput {
            name: "Wi-Fi".to_string(),
        })
        .await
        .unwrap();
    let app = test::init_service(fx.app()).await;

    let uri = format!("/api/v1/places/{}/add_amenity/{}", place.id, wifi.id);
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(bearer(&fx.token_for(&owner)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Add amenity to place");
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/places/{}", place.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["owner"]["email"], "john@example.com");
    assert_eq!(body["amenities"].as_array().unwrap().len(), 2);
    assert_eq!(body["amenities"][0]["name"], "Wi-Fi");
    assert!(body["reviews"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_attach_amenity_is_owner_only() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let pool = fx
        .state
        .facade
        .create_amenity(AmenityInput {
            name: "Pool".to_string(),
        })
        .await
        .unwrap();
    let app = test::init_service(fx.app()).await;

    let uri = format!("/api/v1/places/{}/add_amenity/{}", place.id, pool.id);
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&fx.admin_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/places/{}/add_amenity/{}",
            place.id,
            uuid::Uuid::new_v4()
        ))
        .insert_header(bearer(&fx.token_for(&owner)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Amenity not found");
}

#[actix_web::test]
async fn test_update_place() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let other = fx.user("Jane", "jane@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;
    let uri = format!("/api/v1/places/{}", place.id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&other)))
        .set_json(json!({ "title": "Stolen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&owner)))
        .set_json(json!({ "price": -5.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.admin_token()))
        .set_json(json!({ "title": "Renovated Loft" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Place updated successfully");

    let stored = fx.state.facade.get_place(place.id).await.unwrap();
    assert_eq!(stored.place.title, "Renovated Loft");
    assert_eq!(stored.place.price, 100.0);
}

#[actix_web::test]
async fn test_delete_place_cascades() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let guest = fx.user("Jane", "jane@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let review = fx
        .state
        .facade
        .create_review(
            &Actor::user(guest.id),
            CreateReviewInput {
                text: "Lovely".to_string(),
                rating: 5,
                user_id: guest.id,
                place_id: place.id,
            },
        )
        .await
        .unwrap();
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/places/{}", place.id))
        .insert_header(bearer(&fx.token_for(&guest)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/places/{}", place.id))
        .insert_header(bearer(&fx.token_for(&owner)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Place deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/reviews/{}", review.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/places/{}/reviews", place.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    assert!(fx.state.facade.list_reviews().await.unwrap().is_empty());
}
