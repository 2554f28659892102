use apigateway::{
    config::{Config, UpstreamConfig},
    handler::AppRouter,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{collections::HashMap, time::Duration};

const UPSTREAM_TOKEN: &str = "upstream-token-3f9c";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn upstream_login(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default();

    let user = match email {
        "admin@example.com" => json!({
            "id": "1",
            "role": "admin",
            "permissions": []
        }),
        _ => json!({
            "id": "7",
            "role": "staff",
            "permissions": ["customers.read", "invoices.read", "dashboard.read"]
        }),
    };

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "ok",
            "data": { "token": UPSTREAM_TOKEN, "user": user }
        })),
    )
}

async fn upstream_activities(headers: HeaderMap, Path(id): Path<String>) -> impl IntoResponse {
    if bearer(&headers) != Some(UPSTREAM_TOKEN) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "missing upstream credential" })),
        );
    }

    assert_eq!(id, "7");
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": [{ "id": "a1" }] })),
    )
}

async fn upstream_restore() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "not found" })),
    )
}

async fn upstream_invoices(headers: HeaderMap) -> impl IntoResponse {
    if bearer(&headers) != Some(UPSTREAM_TOKEN) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "missing upstream credential" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": [] })),
    )
}

async fn upstream_stats(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    let scope = query
        .get("scope")
        .cloned()
        .unwrap_or_else(|| "full".to_string());

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": { "customers_total": 5, "scope": scope }
        })),
    )
}

fn upstream_app() -> Router {
    Router::new()
        .route("/auth/login", post(upstream_login))
        .route("/customers/{id}/activities/", get(upstream_activities))
        .route("/customers/restore", post(upstream_restore))
        .route("/invoices", get(upstream_invoices))
        .route("/dashboard/stats", get(upstream_stats))
}

async fn spawn_gateway(upstream_url: &str) -> TestServer {
    let config = Config {
        port: 0,
        jwt_secret: "test-secret".to_string(),
        session_ttl_minutes: 30,
        upstream: UpstreamConfig {
            base_url: upstream_url.to_string(),
            timeout: Duration::from_secs(5),
        },
        redis: None,
    };

    let state = AppState::new(&config).await.expect("app state");
    TestServer::spawn(AppRouter::build(state)).await
}

async fn login(client: &reqwest::Client, gateway_url: &str, email: &str) -> (String, Value) {
    let res = client
        .post(format!("{}/api/auth/login", gateway_url))
        .json(&json!({ "email": email, "password": "password123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();
    (token, body)
}

#[tokio::test]
async fn health_endpoint_answers_without_auth() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;

    let res = reqwest::Client::new()
        .get(format!("{}/api/health", gateway.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;

    let res = reqwest::Client::new()
        .get(format!("{}/api/customers", gateway.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn garbage_tokens_are_rejected() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;

    let res = reqwest::Client::new()
        .get(format!("{}/api/customers", gateway.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn customer_activities_pass_through_unchanged() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    let (token, _) = login(&client, &gateway.base_url, "staff@example.com").await;

    let res = client
        .get(format!("{}/api/customers/7/activities", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "data": [{ "id": "a1" }] }));
}

#[tokio::test]
async fn upstream_errors_are_normalized_with_their_status_and_message() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    // Admin passes every permission check, including customers.restore.
    let (token, _) = login(&client, &gateway.base_url, "admin@example.com").await;

    let res = client
        .post(format!("{}/api/customers/restore", gateway.base_url))
        .bearer_auth(&token)
        .json(&json!({ "ids": ["c_31"] }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "message": "not found" }));
}

#[tokio::test]
async fn missing_permission_is_denied_before_any_upstream_call() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    // Staff has customers.read but not customers.restore.
    let (token, _) = login(&client, &gateway.base_url, "staff@example.com").await;

    let res = client
        .post(format!("{}/api/customers/restore", gateway.base_url))
        .bearer_auth(&token)
        .json(&json!({ "ids": ["c_31"] }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn admin_role_passes_permission_checks_it_was_never_granted() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    // The admin fixture carries an empty permission list on purpose.
    let (token, _) = login(&client, &gateway.base_url, "admin@example.com").await;

    let res = client
        .get(format!("{}/api/invoices", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn upstream_credential_never_reaches_the_client() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", gateway.base_url))
        .json(&json!({ "email": "staff@example.com", "password": "password123" }))
        .send()
        .await
        .unwrap();
    let login_body = res.text().await.unwrap();
    assert!(!login_body.contains(UPSTREAM_TOKEN));

    let token = serde_json::from_str::<Value>(&login_body).unwrap()["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let res = client
        .get(format!("{}/api/auth/me", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let me_body = res.text().await.unwrap();
    assert!(!me_body.contains(UPSTREAM_TOKEN));
}

#[tokio::test]
async fn summary_stats_scope_is_selected_for_viewers_without_report_access() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    // Staff holds dashboard.read but not reports.read.
    let (token, _) = login(&client, &gateway.base_url, "staff@example.com").await;

    let res = client
        .get(format!("{}/api/dashboard/stats", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["scope"], "summary");

    // Admin gets the full payload.
    let (token, _) = login(&client, &gateway.base_url, "admin@example.com").await;

    let res = client
        .get(format!("{}/api/dashboard/stats", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["scope"], "full");
}

#[tokio::test]
async fn transport_failures_surface_as_500_envelopes() {
    // Grab an ephemeral port and immediately release it so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let gateway = spawn_gateway(&dead_url).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/auth/login", gateway.base_url))
        .json(&json!({ "email": "staff@example.com", "password": "password123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn logout_tears_the_session_down() {
    let upstream = TestServer::spawn(upstream_app()).await;
    let gateway = spawn_gateway(&upstream.base_url).await;
    let client = reqwest::Client::new();

    let (token, _) = login(&client, &gateway.base_url, "staff@example.com").await;

    let res = client
        .post(format!("{}/api/auth/logout", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The JWT is still structurally valid, but the session is gone.
    let res = client
        .get(format!("{}/api/customers", gateway.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
