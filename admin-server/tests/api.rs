//! HTTP API 集成测试
//!
//! 直接对路由器做 oneshot 调用，不占用端口。

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use admin_server::core::{Config, ServerState};

const TOKEN: &str = "integration-test-token";

fn test_config(api_token: Option<&str>) -> Config {
    Config {
        http_port: 0,
        api_token: api_token.map(String::from),
        environment: "test".to_string(),
        log_level: "info".to_string(),
        log_dir: None,
        seed_data: true,
    }
}

async fn test_app(api_token: Option<&str>) -> Router {
    let config = test_config(api_token);
    let state = ServerState::initialize(&config).await;
    admin_server::api::app(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ===== 认证 =====

#[tokio::test]
async fn health_is_public() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    // 健康检查与其他接口一样使用 camelCase 字段
    assert_eq!(body["authConfigured"], true);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(Request::builder().uri("/api/rooms").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/rooms")
                .header(header::AUTHORIZATION, "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconfigured_token_is_service_unavailable() {
    let app = test_app(None).await;
    let response = app.oneshot(get("/api/rooms")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("API_TOKEN"));
}

#[tokio::test]
async fn options_preflight_skips_auth() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/rooms")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
}

// ===== Rooms =====

#[tokio::test]
async fn list_seeded_rooms() {
    let app = test_app(Some(TOKEN)).await;
    let response = app.oneshot(get("/api/rooms")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["roomNum"], "101A");
}

#[tokio::test]
async fn get_room_by_type_is_case_insensitive() {
    let app = test_app(Some(TOKEN)).await;
    let response = app.oneshot(get("/api/rooms/by-type/single")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["roomType"], "Single");
}

#[tokio::test]
async fn create_room_then_fetch_it() {
    let app = test_app(Some(TOKEN)).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/rooms",
            json!({
                "roomNum": "201C",
                "roomType": "Suite",
                "price": 150.0,
                "description": "Corner suite"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["status"], "available");

    let id = created["roomId"].as_i64().unwrap();
    let response = app
        .oneshot(get(&format!("/api/rooms/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_room_num_is_conflict() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/rooms",
            json!({
                "roomNum": "101A",
                "roomType": "Single",
                "price": 50.0,
                "description": "Duplicate of a seeded room"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_room_payload_is_bad_request() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/rooms",
            json!({
                "roomNum": "30 1",
                "roomType": "Single",
                "price": 50.0,
                "description": "Space in the room number"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_price_update_is_rejected_and_room_unchanged() {
    let app = test_app(Some(TOKEN)).await;

    // 种子房间 101 (价格 50.00)
    let response = app
        .clone()
        .oneshot(send_json("PUT", "/api/rooms/101", json!({ "price": -5.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 2003); // RoomInvalidPrice

    let response = app.oneshot(get("/api/rooms/101")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let room = body_json(response).await;
    assert_eq!(room["price"], 50.0);
}

#[tokio::test]
async fn unknown_status_value_is_rejected() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/rooms",
            json!({
                "roomNum": "401",
                "roomType": "Single",
                "price": 50.0,
                "status": "occupied",
                "description": "Bad status value"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_room_is_not_found() {
    let app = test_app(Some(TOKEN)).await;

    let response = app.clone().oneshot(get("/api/rooms/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete("/api/rooms/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ===== Customers =====

#[tokio::test]
async fn customer_crud_round_trip() {
    let app = test_app(Some(TOKEN)).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/customers",
            json!({
                "name": "Alice Moreau",
                "email": "alice.moreau@example.com",
                "phone": "+33 1 4477 8899"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "active");

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/customers/{}", id),
            json!({ "status": "inactive" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "inactive");
    assert_eq!(updated["name"], "Alice Moreau");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/customers/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get(&format!("/api/customers/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_customer_email_is_bad_request() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/customers",
            json!({
                "name": "Bad Email",
                "email": "nope",
                "phone": "+1234567890"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ===== Users =====

#[tokio::test]
async fn user_responses_never_contain_password() {
    let app = test_app(Some(TOKEN)).await;
    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("password"));
    assert!(!text.contains("hashed_password_here"));
}

// ===== Invoices =====

#[tokio::test]
async fn create_invoice_computes_totals_server_side() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/invoices",
            json!({
                "customerId": "1",
                "customerName": "John Doe",
                "items": [
                    { "serviceId": "1", "serviceName": "Room Service", "quantity": 2, "price": 15.0 },
                    { "serviceId": "2", "serviceName": "Laundry Service", "quantity": 1, "price": 25.0 }
                ],
                "tax": 5.5,
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let invoice = body_json(response).await;
    assert_eq!(invoice["subtotal"], 55.0);
    assert_eq!(invoice["total"], 60.5);
    assert_eq!(invoice["items"][0]["total"], 30.0);
}

#[tokio::test]
async fn empty_invoice_items_are_bad_request() {
    let app = test_app(Some(TOKEN)).await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/invoices",
            json!({
                "customerId": "1",
                "customerName": "John Doe",
                "items": [],
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_invoice_tax_recomputes_total() {
    let app = test_app(Some(TOKEN)).await;

    // 种子账单 1: subtotal 55.00, tax 5.50
    let response = app
        .clone()
        .oneshot(send_json("PUT", "/api/invoices/1", json!({ "tax": 10.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["subtotal"], 55.0);
    assert_eq!(updated["total"], 65.0);
}

// ===== Service usage =====

#[tokio::test]
async fn record_and_list_service_usage() {
    let app = test_app(Some(TOKEN)).await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/service-usage",
            json!({ "bookingId": 1, "serviceId": 2, "quantity": 3 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/service-usage")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
