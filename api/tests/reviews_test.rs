//! HTTP tests for `/api/v1/reviews`

mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{bearer, Fixture};

#[actix_web::test]
async fn test_create_and_list_reviews() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let guest = fx.user("Jane", "jane@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&fx.token_for(&guest)))
        .set_json(json!({
            "text": "Great stay",
            "rating": 4,
            "user_id": guest.id,
            "place_id": place.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["rating"], 4);
    assert_eq!(created["user_id"], guest.id.to_string());
    assert_eq!(created["place_id"], place.id.to_string());

    let req = test::TestRequest::get().uri("/api/v1/reviews").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["text"], "Great stay");

    for uri in [
        format!("/api/v1/reviews/places/{}", place.id),
        format!("/api/v1/places/{}/reviews", place.id),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["id"], created["id"]);
        assert_eq!(body[0]["user_id"], guest.id.to_string());
    }
}

#[actix_web::test]
async fn test_review_for_missing_place() {
    let fx = Fixture::new();
    let guest = fx.user("Jane", "jane@example.com").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&fx.token_for(&guest)))
        .set_json(json!({
            "text": "Where is it?",
            "rating": 3,
            "user_id": guest.id,
            "place_id": uuid::Uuid::new_v4()
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid place id");
}

#[actix_web::test]
async fn test_review_rating_out_of_range() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let guest = fx.user("Jane", "jane@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&fx.token_for(&guest)))
        .set_json(json!({
            "text": "Off the charts",
            "rating": 6,
            "user_id": guest.id,
            "place_id": place.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    assert!(fx.state.facade.list_reviews().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_update_and_delete_review() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let guest = fx.user("Jane", "jane@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&fx.token_for(&guest)))
        .set_json(json!({
            "text": "Good",
            "rating": 3,
            "user_id": guest.id,
            "place_id": place.id
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/v1/reviews/{}", created["id"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&owner)))
        .set_json(json!({ "rating": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&guest)))
        .set_json(json!({ "text": "Very good", "rating": 5 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Review updated successfully");

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], "Very good");
    assert_eq!(body["rating"], 5);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&guest)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Review deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&fx.token_for(&guest)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_anonymous_review_writes_rejected_before_body() {
    let fx = Fixture::new();
    let owner = fx.user("John", "john@example.com").await;
    let place = fx.place(&owner, "Loft").await;
    let app = test::init_service(fx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .set_json(json!({ "text": "Great", "place_id": place.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/reviews/{}", uuid::Uuid::new_v4()))
        .set_json(json!({ "rating": "five" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
