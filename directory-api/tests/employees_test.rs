/// Integration tests for the employee endpoints
///
/// These tests drive the full router (extractors, handlers, error envelope,
/// fallback) over the in-memory store:
/// - The create / conflict / search / update / delete walkthrough
/// - Validation and identifier failures
/// - Listing order and search semantics
/// - Health check

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_directory_walkthrough() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .send(
            "POST",
            "/employees",
            Some(json!({ "name": "Ann Lee", "email": "ann@x.com", "position": "Engineer" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "ann@x.com");
    assert_eq!(body["message"], "Employee created successfully");
    let ann_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = ctx
        .send(
            "POST",
            "/employees",
            Some(json!({ "name": "Bob", "email": "ANN@X.COM", "position": "Manager" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already exists");

    let (status, body) = ctx.send("GET", "/employees?search=eng", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Ann Lee");

    let (status, body) = ctx
        .send(
            "PUT",
            &format!("/employees/{}", ann_id),
            Some(json!({ "position": "Senior Engineer" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["position"], "Senior Engineer");
    assert_eq!(body["data"]["name"], "Ann Lee");
    assert_eq!(body["data"]["email"], "ann@x.com");
    assert_eq!(body["message"], "Employee updated successfully");

    let (status, body) = ctx.send("DELETE", &format!("/employees/{}", ann_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Employee deleted successfully");
    assert!(body.get("data").is_none());

    let (status, body) = ctx.send("GET", &format!("/employees/{}", ann_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .send("POST", "/employees", Some(json!({ "name": " A ", "email": "nope" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let errors = body["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["name", "email", "position"]);
    assert_eq!(errors[2]["message"], "Position is required");
}

#[tokio::test]
async fn test_malformed_body_uses_envelope() {
    let ctx = TestContext::new();

    let (status, body) = ctx.send_raw("POST", "/employees", "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let ctx = TestContext::new();

    for method in ["GET", "DELETE"] {
        let (status, body) = ctx.send(method, "/employees/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "id");
        assert_eq!(body["errors"][0]["message"], "Invalid employee ID");
    }

    let (status, _) = ctx
        .send("PUT", "/employees/123", Some(json!({ "name": "Ann" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_undecodable_id_uses_envelope() {
    let ctx = TestContext::new();

    for method in ["GET", "PUT", "DELETE"] {
        let body = (method == "PUT").then(|| json!({ "name": "Ann Lee" }));
        let (status, body) = ctx.send(method, "/employees/%FF", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} /employees/%FF", method);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid employee ID");
        assert_eq!(body["errors"][0]["field"], "id");
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let ctx = TestContext::new();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = ctx
        .send("PUT", &format!("/employees/{}", missing), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx.send("DELETE", &format!("/employees/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_newest_first_and_search_or_semantics() {
    let ctx = TestContext::new();
    let ann = ctx.create_employee("Ann Lee", "ann@x.com", "Engineer").await;
    let bob = ctx.create_employee("Bob Stone", "bob@eng.io", "Manager").await;
    let cid = ctx.create_employee("Cid Moss", "cid@x.com", "Designer").await;

    let (_, body) = ctx.send("GET", "/employees", None).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(body["count"], 3);
    assert_eq!(ids, vec![cid.as_str(), bob.as_str(), ann.as_str()]);

    // "ENG" hits Ann by position and Bob by email
    let (_, body) = ctx.send("GET", "/employees?search=ENG", None).await;
    assert_eq!(body["count"], 2);

    let (_, body) = ctx.send("GET", "/employees?search=", None).await;
    assert_eq!(body["count"], 3);

    let (status, body) = ctx.send("GET", "/employees?search=zzz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_update_conflict_and_validation() {
    let ctx = TestContext::new();
    let ann = ctx.create_employee("Ann Lee", "ann@x.com", "Engineer").await;
    ctx.create_employee("Bob Stone", "bob@x.com", "Manager").await;

    let (status, body) = ctx
        .send("PUT", &format!("/employees/{}", ann), Some(json!({ "email": "BOB@x.com" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");

    let (status, body) = ctx
        .send("PUT", &format!("/employees/{}", ann), Some(json!({ "name": "" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "Name is required");
}

#[tokio::test]
async fn test_empty_update_refreshes_updated_at() {
    let ctx = TestContext::new();
    let ann = ctx.create_employee("Ann Lee", "ann@x.com", "Engineer").await;

    let (_, before) = ctx.send("GET", &format!("/employees/{}", ann), None).await;
    let (status, after) = ctx
        .send("PUT", &format!("/employees/{}", ann), Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["data"]["name"], before["data"]["name"]);
    assert_eq!(after["data"]["createdAt"], before["data"]["createdAt"]);
    assert_ne!(after["data"]["updatedAt"], before["data"]["updatedAt"]);
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let ctx = TestContext::new();

    let (status, body) = ctx.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "connected");

    let (status, body) = ctx.send("GET", "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}
