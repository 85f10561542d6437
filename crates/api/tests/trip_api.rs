//! HTTP-level integration tests for trips and trip overviews.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_trip, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_trip_generates_checklist() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "rainy", "business").await;

    assert_eq!(created["trip"]["destination"], "Lisbon");
    assert_eq!(created["trip"]["weather"], "rainy");
    assert_eq!(created["trip"]["trip_type"], "business");

    let items = created["items"].as_array().unwrap();
    assert_eq!(items.len(), 11);
    assert_eq!(items[0]["name"], "Passport/ID");
    assert_eq!(items[6]["name"], "Umbrella");
    assert_eq!(items[10]["name"], "Business Cards");
    assert!(items.iter().all(|i| i["is_packed"] == false));
    assert!(items
        .iter()
        .all(|i| i["packing_list_id"] == created["packing_list"]["id"]));

    let list = &created["packing_list"];
    assert_eq!(list["trip_id"], created["trip"]["id"]);
    assert_eq!(list["total_items"], 11);
    assert_eq!(list["packed_items"], 0);
    assert_eq!(list["categories"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_trip_applies_form_defaults() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/trips",
        json!({
            "destination": "Oslo",
            "start_date": "2030-01-10",
            "end_date": "2030-01-12",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["trip"]["weather"], "sunny");
    assert_eq!(json["trip"]["trip_type"], "leisure");
    assert_eq!(json["items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn create_trip_with_missing_fields_is_rejected_and_stores_nothing() {
    let app = build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/trips",
        json!({ "destination": "   ", "start_date": "2030-01-10" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please fill in all required fields");

    let trips = body_json(get(app.clone(), "/api/v1/trips").await).await;
    assert_eq!(trips.as_array().unwrap().len(), 0);
    let lists = body_json(get(app, "/api/v1/packing-lists").await).await;
    assert_eq!(lists.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_trip_with_blank_date_is_a_validation_error() {
    let app = build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/trips",
        json!({
            "destination": "Oslo",
            "start_date": "",
            "end_date": "2030-01-12",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please fill in all required fields");

    let trips = body_json(get(app, "/api/v1/trips").await).await;
    assert_eq!(trips.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_trip_ending_before_it_starts_is_rejected() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/trips",
        json!({
            "destination": "Rome",
            "start_date": "2030-05-10",
            "end_date": "2030-05-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Read / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_update_and_delete_trip() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "cold", "adventure").await;
    let id = created["trip"]["id"].as_str().unwrap();
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let response = get(app.clone(), &format!("/api/v1/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["destination"], "Lisbon");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/trips/{id}"),
        json!({ "destination": "Porto" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["destination"], "Porto");
    assert_eq!(updated["weather"], "cold");

    let response = delete(app.clone(), &format!("/api/v1/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get(app.clone(), &format!("/api/v1/packing-lists/{list_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let items = body_json(get(app, "/api/v1/packing-items").await).await;
    assert_eq!(items.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_trip_returns_404() {
    let app = build_test_app();
    let id = uuid::Uuid::new_v4();

    let response = get(app.clone(), &format!("/api/v1/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = delete(app, &format!("/api/v1/trips/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trips_are_listed_in_creation_order() {
    let app = build_test_app();
    let first = create_trip(app.clone(), "sunny", "leisure").await;
    let second = create_trip(app.clone(), "hot", "beach").await;

    let trips = body_json(get(app, "/api/v1/trips").await).await;
    let trips = trips.as_array().unwrap();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0]["id"], first["trip"]["id"]);
    assert_eq!(trips[1]["id"], second["trip"]["id"]);
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overview_groups_items_and_reports_progress() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "hot", "beach").await;
    let id = created["trip"]["id"].as_str().unwrap();

    let response = get(app, &format!("/api/v1/trips/{id}/overview")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["trip"]["id"], created["trip"]["id"]);
    assert_eq!(data["progress"]["total_items"], 12);
    assert_eq!(data["progress"]["packed_items"], 0);
    assert_eq!(data["progress"]["percent"], 0);
    assert_eq!(data["duration_days"], 7);
    assert!(data["days_until_departure"].as_i64().unwrap() > 0);

    let groups = data["items_by_category"].as_object().unwrap();
    let order: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(
        order,
        vec!["Documents", "Electronics", "Toiletries", "Clothing", "Miscellaneous"]
    );
    // Underwear, Socks, Hat, Swimwear, Flip Flops
    assert_eq!(groups["Clothing"].as_array().unwrap().len(), 5);
}
