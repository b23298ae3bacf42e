//! End-to-end tests for the availability read/write contract and the
//! composed public view.

use menuboard_integration_tests::TestServer;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn update(server: &TestServer, ids: &[&str]) -> Value {
    let resp = server
        .client
        .post(server.url("/api/update-availability"))
        .json(&json!({ "availableItems": ids }))
        .send()
        .await
        .expect("Update request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Invalid update response")
}

async fn get_json(server: &TestServer, path: &str) -> Value {
    let resp = server
        .client
        .get(server.url(path))
        .send()
        .await
        .expect("GET request failed");
    assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
    resp.json().await.expect("Invalid JSON response")
}

#[tokio::test]
async fn test_menu_endpoint_serves_catalog() {
    let server = TestServer::spawn().await;

    let menu = get_json(&server, "/api/menu").await;
    assert_eq!(menu["categories"][0]["name"], "Drinks");
    assert_eq!(menu["categories"][0]["items"][0]["id"], "tea-01");
    assert_eq!(menu["categories"][1]["items"][0]["name"], "Chips");
}

#[tokio::test]
async fn test_availability_defaults_to_empty_before_first_save() {
    let server = TestServer::spawn().await;

    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["availableItems"], json!([]));
    // A value, not an error: the timestamp is present even with no record.
    assert!(record["lastUpdated"].is_string());

    let view = get_json(&server, "/api/public-view").await;
    assert_eq!(view, json!([]));
}

#[tokio::test]
async fn test_update_then_public_read_scenario() {
    let server = TestServer::spawn().await;
    server.login().await;

    // Catalog: Drinks [Tea, Coffee], Snacks [Chips]; select {Coffee, Chips}.
    update(&server, &["coffee-01", "chips-01"]).await;

    let view = get_json(&server, "/api/public-view").await;
    assert_eq!(view.as_array().map(Vec::len), Some(2));
    assert_eq!(view[0]["name"], "Drinks");
    assert_eq!(view[0]["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(view[0]["items"][0]["name"], "Coffee");
    assert_eq!(view[1]["name"], "Snacks");
    assert_eq!(view[1]["items"][0]["name"], "Chips");

    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["availableItems"], json!(["coffee-01", "chips-01"]));
}

#[tokio::test]
async fn test_replace_supersedes_rather_than_merges() {
    let server = TestServer::spawn().await;
    server.login().await;

    update(&server, &["tea-01", "coffee-01"]).await;
    update(&server, &["chips-01"]).await;

    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["availableItems"], json!(["chips-01"]));
}

#[tokio::test]
async fn test_identical_update_advances_last_updated() {
    let server = TestServer::spawn().await;
    server.login().await;

    let first = update(&server, &["tea-01"]).await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let second = update(&server, &["tea-01"]).await;

    let t1 = first["lastUpdated"].as_str().expect("missing timestamp");
    let t2 = second["lastUpdated"].as_str().expect("missing timestamp");
    // RFC 3339 with fixed precision compares chronologically as a string.
    assert!(t2 > t1, "expected {t2} > {t1}");

    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["lastUpdated"], second["lastUpdated"]);
}

#[tokio::test]
async fn test_unknown_ids_are_accepted_and_never_shown() {
    let server = TestServer::spawn().await;
    server.login().await;

    update(&server, &["nonexistent-id"]).await;

    // The record carries the id verbatim...
    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["availableItems"], json!(["nonexistent-id"]));

    // ...but neither view represents it.
    let public = get_json(&server, "/api/public-view").await;
    assert_eq!(public, json!([]));

    let admin = get_json(&server, "/api/admin-view").await;
    for category in admin.as_array().expect("admin view is an array") {
        for item in category["items"].as_array().expect("items is an array") {
            assert_eq!(item["selected"], json!(false));
        }
    }
}

#[tokio::test]
async fn test_admin_view_lists_every_item_with_selection_state() {
    let server = TestServer::spawn().await;
    server.login().await;

    update(&server, &["coffee-01"]).await;

    let admin = get_json(&server, "/api/admin-view").await;
    assert_eq!(admin[0]["name"], "Drinks");
    // Catalog order, not name order.
    assert_eq!(admin[0]["items"][0]["item"]["name"], "Tea");
    assert_eq!(admin[0]["items"][0]["selected"], json!(false));
    assert_eq!(admin[0]["items"][1]["item"]["name"], "Coffee");
    assert_eq!(admin[0]["items"][1]["selected"], json!(true));
    assert_eq!(admin[1]["items"][0]["selected"], json!(false));
}

#[tokio::test]
async fn test_missing_body_field_means_nothing_available() {
    let server = TestServer::spawn().await;
    server.login().await;

    update(&server, &["tea-01"]).await;

    let resp = server
        .client
        .post(server.url("/api/update-availability"))
        .json(&json!({}))
        .send()
        .await
        .expect("Update request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let record = get_json(&server, "/api/available-items").await;
    assert_eq!(record["availableItems"], json!([]));
}

#[tokio::test]
async fn test_concurrent_updates_last_write_wins_without_merge() {
    let server = TestServer::spawn().await;
    server.login().await;

    let a = update(&server, &["tea-01"]);
    let b = update(&server, &["chips-01"]);
    let (_, _) = tokio::join!(a, b);

    // No conflict error was surfaced to either caller; the surviving record
    // is exactly one of the two submitted sets, never a merge.
    let record = get_json(&server, "/api/available-items").await;
    let items = &record["availableItems"];
    assert!(
        items == &json!(["tea-01"]) || items == &json!(["chips-01"]),
        "unexpected record after race: {items}"
    );
}
