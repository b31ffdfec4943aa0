#![allow(dead_code)]

use httpmock::MockServer;
use serde_json::{json, Value};
use yoga_frontend::{api::ApiClient, App};

pub fn test_app(server: &MockServer) -> App {
    App::with_client(ApiClient::new_with_base_url(server.url("/api")))
}

pub fn identity_body(id: u64, admin: bool) -> Value {
    json!({
        "id": id,
        "token": "fake-jwt-token",
        "type": "Bearer",
        "username": "test@example.com",
        "firstName": "Test",
        "lastName": "User",
        "admin": admin
    })
}

pub fn session_body(id: u64, users: &[u64]) -> Value {
    json!({
        "id": id,
        "name": "Yoga Session",
        "description": "A relaxing yoga session",
        "date": "2023-01-01T10:00:00.000Z",
        "teacher_id": 2,
        "users": users,
        "createdAt": "2022-12-01T00:00:00",
        "updatedAt": "2022-12-05T00:00:00"
    })
}

pub fn teacher_body(id: u64) -> Value {
    json!({
        "id": id,
        "lastName": "Smith",
        "firstName": "Jane",
        "createdAt": "2022-11-01T00:00:00",
        "updatedAt": "2022-11-05T00:00:00"
    })
}
