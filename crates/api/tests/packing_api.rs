//! HTTP-level integration tests for packing lists and packing items.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_trip, delete, get, post_empty, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Toggle and progress
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_item_updates_list_progress() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "sunny", "leisure").await;
    let item_id = created["items"][0]["id"].as_str().unwrap();
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let uri = format!("/api/v1/packing-items/{item_id}/toggle");
    let response = post_empty(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["item"]["is_packed"], true);
    assert_eq!(json["packing_list"]["packed_items"], 1);
    assert_eq!(json["progress"]["percent"], 17);

    let uri = format!("/api/v1/packing-lists/{list_id}/progress");
    let progress = body_json(get(app, &uri).await).await;
    assert_eq!(progress["data"]["total_items"], 6);
    assert_eq!(progress["data"]["packed_items"], 1);
    assert_eq!(progress["data"]["percent"], 17);
}

#[tokio::test]
async fn toggle_unknown_item_returns_404() {
    let app = build_test_app();
    let id = uuid::Uuid::new_v4();

    let response = post_empty(app, &format!("/api/v1/packing-items/{id}/toggle")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn fully_packed_list_reports_100_percent() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "sunny", "leisure").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    for item in created["items"].as_array().unwrap() {
        let id = item["id"].as_str().unwrap();
        post_empty(app.clone(), &format!("/api/v1/packing-items/{id}/toggle")).await;
    }

    let uri = format!("/api/v1/packing-lists/{list_id}/progress");
    let progress = body_json(get(app, &uri).await).await;
    assert_eq!(progress["data"]["packed_items"], 6);
    assert_eq!(progress["data"]["percent"], 100);
}

// ---------------------------------------------------------------------------
// Item CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn added_item_uses_defaults_and_counts_toward_total() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "sunny", "leisure").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let response = post_json(
        app.clone(),
        "/api/v1/packing-items",
        json!({
            "packing_list_id": list_id,
            "name": "Travel Pillow",
            "category": "Miscellaneous",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let item = body_json(response).await;
    assert_eq!(item["quantity"], 1);
    assert_eq!(item["priority"], "medium");
    assert_eq!(item["is_packed"], false);
    assert_eq!(item["notes"], "");

    let list = body_json(get(app.clone(), &format!("/api/v1/packing-lists/{list_id}")).await).await;
    assert_eq!(list["total_items"], 7);

    let filtered = body_json(
        get(app, &format!("/api/v1/packing-items?packing_list_id={list_id}")).await,
    )
    .await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 7);
    assert_eq!(filtered[6]["name"], "Travel Pillow");
}

#[tokio::test]
async fn item_for_unknown_list_is_rejected() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/packing-items",
        json!({
            "packing_list_id": uuid::Uuid::new_v4(),
            "name": "Orphan",
            "category": "Documents",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn item_with_zero_quantity_is_rejected() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "sunny", "leisure").await;

    let response = post_json(
        app,
        "/api/v1/packing-items",
        json!({
            "packing_list_id": created["packing_list"]["id"],
            "name": "Nothing",
            "category": "Clothing",
            "quantity": 0,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_and_delete_item_keep_counts_in_sync() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "rainy", "leisure").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();
    let item_id = created["items"][1]["id"].as_str().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/packing-items/{item_id}"),
        json!({ "is_packed": true, "notes": "Spare in backpack" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let item = body_json(response).await;
    assert_eq!(item["is_packed"], true);
    assert_eq!(item["notes"], "Spare in backpack");

    let list = body_json(get(app.clone(), &format!("/api/v1/packing-lists/{list_id}")).await).await;
    assert_eq!(list["packed_items"], 1);

    let response = delete(app.clone(), &format!("/api/v1/packing-items/{item_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = body_json(get(app, &format!("/api/v1/packing-lists/{list_id}")).await).await;
    assert_eq!(list["total_items"], 7);
    assert_eq!(list["packed_items"], 0);
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn grouped_items_follow_first_seen_category_order() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "rainy", "business").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let response = get(app, &format!("/api/v1/packing-lists/{list_id}/items")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let groups = body_json(response).await;
    let groups = groups["data"].as_object().unwrap();
    let order: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(
        order,
        vec!["Documents", "Electronics", "Toiletries", "Clothing", "Miscellaneous"]
    );
    let electronics: Vec<&str> = groups["Electronics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(electronics, vec!["Phone Charger", "Laptop"]);
}

#[tokio::test]
async fn update_list_categories_validates_input() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "sunny", "leisure").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/packing-lists/{list_id}"),
        json!({ "categories": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        app,
        &format!("/api/v1/packing-lists/{list_id}"),
        json!({ "categories": ["Documents", "Clothing"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list["categories"], json!(["Documents", "Clothing"]));
    assert_eq!(list["total_items"], 6);
}

#[tokio::test]
async fn deleting_list_removes_its_items() {
    let app = build_test_app();
    let created = create_trip(app.clone(), "cold", "leisure").await;
    let list_id = created["packing_list"]["id"].as_str().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/packing-lists/{list_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let items = body_json(get(app.clone(), "/api/v1/packing-items").await).await;
    assert_eq!(items.as_array().unwrap().len(), 0);

    // The trip survives without a list; its overview reports zero progress.
    let trip_id = created["trip"]["id"].as_str().unwrap();
    let overview = body_json(get(app, &format!("/api/v1/trips/{trip_id}/overview")).await).await;
    assert!(overview["data"]["packing_list"].is_null());
    assert_eq!(overview["data"]["progress"]["percent"], 0);
    assert_eq!(overview["data"]["items_by_category"], json!({}));
}
