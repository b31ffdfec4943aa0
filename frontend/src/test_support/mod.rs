pub mod helpers {
    use crate::api::{ApiClient, SessionIdentity};
    use crate::state::session::SessionStore;
    use serde_json::json;

    pub fn user_identity() -> SessionIdentity {
        SessionIdentity {
            id: 1,
            token: "fake-jwt-token".into(),
            token_type: "Bearer".into(),
            username: "test@example.com".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            is_admin: false,
        }
    }

    pub fn admin_identity() -> SessionIdentity {
        SessionIdentity {
            id: 2,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            is_admin: true,
            ..user_identity()
        }
    }

    pub fn logged_in_store(identity: SessionIdentity) -> SessionStore {
        let store = SessionStore::new();
        store.log_in(identity);
        store
    }

    pub fn api_client(server: &httpmock::MockServer, store: &SessionStore) -> ApiClient {
        ApiClient::new_with_base_url(server.url("/api")).with_session(store.clone())
    }

    pub fn identity_json(id: u64, admin: bool) -> serde_json::Value {
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

    pub fn session_json(id: u64, users: &[u64]) -> serde_json::Value {
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

    pub fn teacher_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "lastName": "Smith",
            "firstName": "Jane",
            "createdAt": "2022-11-01T00:00:00",
            "updatedAt": "2022-11-05T00:00:00"
        })
    }

    pub fn user_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "email": "test@example.com",
            "firstName": "Test",
            "lastName": "User",
            "admin": false,
            "createdAt": "2022-01-01T00:00:00",
            "updatedAt": "2022-01-02T00:00:00"
        })
    }
}
