use serde_json::json;
use verdora_rust_cart::CartClient;
use verdora_rust_core::{Error, Session, SessionStore};
use verdora_rust_orders::{CheckoutClient, CheckoutForm, OrdersClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn logged_in_store() -> SessionStore {
    let store = SessionStore::in_memory();
    store
        .save(Session {
            token: "tok".to_string(),
            user_id: "user-1".to_string(),
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
            role: None,
        })
        .unwrap();
    store
}

fn checkout_for(server: &MockServer, store: SessionStore) -> (CheckoutClient, CartClient) {
    let http = reqwest::Client::new();
    let cart = CartClient::new(&server.uri(), http.clone(), store.clone());
    let orders = OrdersClient::new(&server.uri(), http, store);
    (CheckoutClient::new(orders, cart.clone()), cart)
}

fn filled_form() -> CheckoutForm {
    CheckoutForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Orchard Way".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        country: "USA".to_string(),
        notes: None,
    }
}

fn cart_with_items() -> serde_json::Value {
    json!({
        "success": true,
        "cart": {
            "userId": "user-1",
            "items": [
                { "productId": "p1", "name": "Kale Chips", "price": 4.99, "quantity": 2, "subtotal": 9.98 },
                { "productId": "p2", "name": "Trail Mix", "price": 6.50, "quantity": 1, "subtotal": 6.50 }
            ],
            "totalItems": 3,
            "totalAmount": 16.48
        }
    })
}

#[tokio::test]
async fn place_order_builds_payload_from_cart_and_clears_it() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carts/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_with_items()))
        .mount(&mock_server)
        .await;

    // The POSTed payload must carry the cart's captured prices and the
    // server-computed total, untouched.
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_partial_json(json!({
            "customer": { "name": "Ada", "city": "Springfield" },
            "items": [
                { "productId": "p1", "price": 4.99, "quantity": 2 },
                { "productId": "p2", "price": 6.50, "quantity": 1 }
            ],
            "totalAmount": 16.48
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "order": {
                "_id": "o1",
                "customer": {
                    "name": "Ada", "email": "ada@example.com", "phone": "555-0100",
                    "address": "1 Orchard Way", "city": "Springfield",
                    "postalCode": "12345", "country": "USA"
                },
                "items": [
                    { "productId": "p1", "name": "Kale Chips", "price": 4.99, "quantity": 2 },
                    { "productId": "p2", "name": "Trail Mix", "price": 6.50, "quantity": 1 }
                ],
                "totalAmount": 16.48,
                "paymentStatus": "pending",
                "deliveryStatus": "pending"
            },
            "paymentUrl": "https://pay.example.com/authorize/o1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/carts/clear/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (checkout, cart) = checkout_for(&mock_server, logged_in_store());
    let created = checkout.place_order(&filled_form()).await.unwrap();

    assert_eq!(created.order.id, "o1");
    assert_eq!(
        created.payment_url.as_deref(),
        Some("https://pay.example.com/authorize/o1")
    );
    assert!(cart.snapshot().is_none());
}

#[tokio::test]
async fn empty_cart_blocks_checkout_before_order_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carts/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "cart": { "userId": "user-1", "items": [], "totalItems": 0, "totalAmount": 0.0 }
        })))
        .mount(&mock_server)
        .await;

    let (checkout, _cart) = checkout_for(&mock_server, logged_in_store());
    let result = checkout.place_order(&filled_form()).await;

    match result {
        Err(Error::Validation(message)) => assert_eq!(message, "Your cart is empty"),
        other => panic!("expected validation error, got {:?}", other),
    }

    // Only the cart fetch went out; no order-create call was issued.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/carts/user-1");
}

#[tokio::test]
async fn logged_out_checkout_reads_as_empty_cart() {
    let mock_server = MockServer::start().await;
    let (checkout, _cart) = checkout_for(&mock_server, SessionStore::in_memory());

    let result = checkout.place_order(&filled_form()).await;

    match result {
        Err(Error::Validation(message)) => assert_eq!(message, "Your cart is empty"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_shipping_fields_block_order_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carts/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_with_items()))
        .mount(&mock_server)
        .await;

    let (checkout, _cart) = checkout_for(&mock_server, logged_in_store());

    let mut form = filled_form();
    form.city = "  ".to_string();
    let result = checkout.place_order(&form).await;

    match result {
        Err(Error::Validation(message)) => {
            assert_eq!(message, "All shipping fields are required");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    // Cart fetch only.
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_cart_clear_does_not_fail_the_checkout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carts/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_with_items()))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "order": {
                "_id": "o2",
                "customer": {
                    "name": "Ada", "email": "ada@example.com", "phone": "555-0100",
                    "address": "1 Orchard Way", "city": "Springfield",
                    "postalCode": "12345", "country": "USA"
                },
                "items": [],
                "totalAmount": 16.48,
                "paymentStatus": "pending",
                "deliveryStatus": "pending"
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/carts/clear/user-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (checkout, _cart) = checkout_for(&mock_server, logged_in_store());
    let created = checkout.place_order(&filled_form()).await.unwrap();

    assert_eq!(created.order.id, "o2");
    assert!(created.payment_url.is_none());
}
