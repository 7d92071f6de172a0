
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::DateTime;
use serde_json::{Value, json};
use test_util::{TestDataFile, file_backed_router};
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

#[tokio::test]
async fn raw_data_totals_cover_every_saved_user() {
    let data_file = TestDataFile::reserve();
    let app = file_backed_router(&data_file).await;

    for (user, todos) in [
        ("alice", json!([{ "text": "buy milk", "completed": true }, { "text": "call mom" }])),
        ("bob", json!([{ "text": "ship release", "completed": false }])),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/todos/{user}"),
                &json!({ "todos": todos }),
            ))
            .await
            .expect("save should complete");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = body_json(
        app.oneshot(get_request("/api/raw-data"))
            .await
            .expect("request should complete"),
    )
    .await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total_users"], json!(2));
    assert_eq!(body["total_todos"], json!(3));
    assert_eq!(body["data"]["bob"][0]["text"], json!("ship release"));
    DateTime::parse_from_rfc3339(body["timestamp"].as_str().expect("timestamp should be a string"))
        .expect("timestamp should be ISO-8601");
}

#[tokio::test]
async fn health_tracks_distinct_users_written() {
    let data_file = TestDataFile::reserve();
    let app = file_backed_router(&data_file).await;

    for user in ["alice", "bob", "alice"] {
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/todos/{user}"),
                &json!({ "todos": [{ "text": "anything" }] }),
            ))
            .await
            .expect("save should complete");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = body_json(
        app.oneshot(get_request("/health"))
            .await
            .expect("request should complete"),
    )
    .await;

    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["data_stats"]["total_users"], json!(2));
    assert_eq!(body["data_stats"]["total_todos"], json!(2));
    assert_eq!(body["endpoints"]["health"], json!("/health"));
}

#[tokio::test]
async fn concurrent_saves_to_different_users_are_both_visible() {
    let data_file = TestDataFile::reserve();
    let app = file_backed_router(&data_file).await;

    let (alice_saved, bob_saved) = tokio::join!(
        app.clone().oneshot(post_json(
            "/api/todos/alice",
            &json!({ "todos": [{ "text": "buy milk" }] }),
        )),
        app.clone().oneshot(post_json(
            "/api/todos/bob",
            &json!({ "todos": [{ "text": "ship release" }] }),
        )),
    );
    assert_eq!(
        alice_saved.expect("alice's save should complete").status(),
        StatusCode::OK
    );
    assert_eq!(
        bob_saved.expect("bob's save should complete").status(),
        StatusCode::OK
    );

    let body = body_json(
        app.oneshot(get_request("/api/raw-data"))
            .await
            .expect("request should complete"),
    )
    .await;

    assert_eq!(body["total_users"], json!(2));
    assert_eq!(body["data"]["alice"][0]["text"], json!("buy milk"));
    assert_eq!(body["data"]["bob"][0]["text"], json!("ship release"));
}

#[tokio::test]
async fn report_page_embeds_totals_and_user_dumps() {
    let data_file = TestDataFile::reserve();
    let app = file_backed_router(&data_file).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/todos/alice",
            &json!({ "todos": [
                { "text": "buy milk", "completed": true },
                { "text": "call mom", "completed": false }
            ] }),
        ))
        .await
        .expect("save should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let page_response = app
        .oneshot(get_request("/raw-data"))
        .await
        .expect("request should complete");
    assert_eq!(page_response.status(), StatusCode::OK);

    let page = body_text(page_response).await;
    assert!(page.contains("<div class=\"stat-number\">1</div><div>Total Users</div>"));
    assert!(page.contains("<div class=\"stat-number\">2</div><div>Total Todos</div>"));
    assert!(page.contains("User: alice"));
    assert!(page.contains("1 Completed"));
    assert!(page.contains("1 Pending"));
    assert!(page.contains("buy milk"));
}

#[tokio::test]
async fn report_page_shows_the_no_data_notice_for_a_fresh_store() {
    let data_file = TestDataFile::reserve();
    let app = file_backed_router(&data_file).await;

    let page = body_text(
        app.oneshot(get_request("/raw-data"))
            .await
            .expect("request should complete"),
    )
    .await;

    assert!(page.contains("No Data Found"));
}
