use serde_json::json;
use verdora_rust_admin::{
    CustomerPayload, CustomersClient, MessagesClient, Selection, UsersClient,
};
use verdora_rust_core::{Error, Role, Session, SessionStore};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn admin_store() -> SessionStore {
    let store = SessionStore::in_memory();
    store
        .save(Session {
            token: "admin-tok".to_string(),
            user_id: "admin-1".to_string(),
            user_name: "Root".to_string(),
            user_email: "root@example.com".to_string(),
            role: Some(Role::SuperAdmin),
        })
        .unwrap();
    store
}

#[tokio::test]
async fn list_customers_sends_auth_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(header("x-auth-token", "admin-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "customers": [
                { "_id": "c1", "name": "Ada", "email": "ada@example.com" },
                { "_id": "c2", "name": "Grace", "email": "grace@example.com" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CustomersClient::new(&mock_server.uri(), reqwest::Client::new(), admin_store());
    let customers = client.list().await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name, "Ada");
}

#[tokio::test]
async fn create_customer_posts_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_partial_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "city": "Bergen"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "customer": { "_id": "c9", "name": "Ada", "email": "ada@example.com", "city": "Bergen" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CustomersClient::new(&mock_server.uri(), reqwest::Client::new(), admin_store());
    let payload = CustomerPayload {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        city: Some("Bergen".to_string()),
        ..Default::default()
    };
    let created = client.create(&payload).await.unwrap();

    assert_eq!(created.id, "c9");
    assert_eq!(created.city.as_deref(), Some("Bergen"));
}

#[tokio::test]
async fn bulk_delete_issues_one_call_per_id() {
    let mock_server = MockServer::start().await;

    for id in ["c1", "c2", "c3"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/customers/{}", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": true })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = CustomersClient::new(&mock_server.uri(), reqwest::Client::new(), admin_store());

    let mut selection = Selection::default();
    selection.select_all(["c1", "c2", "c3"].iter().map(|id| id.to_string()));

    let deleted = client.delete_many(&selection.ids()).await.unwrap();
    assert_eq!(deleted, 3);

    // All calls succeeded, so the table clears its checkboxes and reloads.
    selection.clear();
    assert!(selection.is_empty());
}

#[tokio::test]
async fn bulk_delete_reports_first_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/u2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Cannot delete the last superadmin"
        })))
        .mount(&mock_server)
        .await;

    let client = UsersClient::new(&mock_server.uri(), reqwest::Client::new(), admin_store());
    let result = client
        .delete_many(&["u1".to_string(), "u2".to_string()])
        .await;

    match result {
        Err(Error::Api { message, .. }) => {
            assert_eq!(message, "Cannot delete the last superadmin")
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    // Both deletes were still attempted; the fan-out is concurrent.
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn mark_read_hits_the_read_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/messages/m1/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": {
                "_id": "m1",
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Wholesale pricing",
                "body": "Do you offer bulk discounts?",
                "read": true
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MessagesClient::new(&mock_server.uri(), reqwest::Client::new(), admin_store());
    let message = client.mark_read("m1").await.unwrap();

    assert!(message.read);
    assert_eq!(message.subject.as_deref(), Some("Wholesale pricing"));
}

#[tokio::test]
async fn expired_session_surfaces_superadmin_login_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Invalid token"
        })))
        .mount(&mock_server)
        .await;

    let store = admin_store();
    let client =
        CustomersClient::new(&mock_server.uri(), reqwest::Client::new(), store.clone());
    let result = client.list().await;

    match result {
        Err(Error::Unauthorized { login_route }) => {
            assert_eq!(login_route.path(), "/superadmin/login")
        }
        other => panic!("expected Unauthorized, got {:?}", other),
    }
    assert!(!store.is_authenticated());
}
