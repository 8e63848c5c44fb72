//! Shared helpers for the mock's integration tests

#![allow(dead_code)] // Not every test file uses every helper

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use pointdns_mock::{
    auth::{User, encode_basic},
    fixtures,
    http_server::HttpServer,
    mock::MockServer,
    zone::{Record, ZoneInfo},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Router wired to the given mock
pub fn router(mock: &MockServer) -> Router {
    HttpServer::new(mock.clone(), "127.0.0.1:0".parse().unwrap()).router()
}

/// Send a request through the router without a network round trip
pub async fn send(mock: &MockServer, request: Request<Body>) -> Response<Body> {
    router(mock).oneshot(request).await.unwrap()
}

/// GET with optional Basic credentials
pub fn get(uri: &str, user: Option<&User>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header("Authorization", user.authorization_header());
    }
    builder.body(Body::empty()).unwrap()
}

/// Request with a JSON body and Basic credentials
pub fn json_request(method: &str, uri: &str, user: &User, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", user.authorization_header())
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request with a raw Authorization header value
pub fn get_with_header(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap()
}

pub fn basic(principal: &str, secret: &str) -> String {
    encode_basic(principal, secret)
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Mock with one random user registered among two decoys
pub fn mock_with_user() -> (MockServer, User) {
    let mock = MockServer::default();
    let user = fixtures::user();
    mock.add_user(fixtures::user());
    mock.add_user(user.clone());
    mock.add_user(fixtures::user());
    (mock, user)
}

/// Two random zones with distinct ids
pub fn two_zones() -> (ZoneInfo, ZoneInfo) {
    let first = fixtures::zone(999);
    let mut second = fixtures::zone(999);
    second.id = first.id % 999 + 1;
    (first, second)
}

/// Two random records with distinct ids
pub fn two_records() -> (Record, Record) {
    let first = fixtures::record(999);
    let mut second = fixtures::record(999);
    second.id = first.id % 999 + 1;
    (first, second)
}

/// Serve the mock on an ephemeral port in the background
pub async fn spawn_server(mock: &MockServer) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(mock.clone(), addr);
    let handle = tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });
    (addr, handle)
}
