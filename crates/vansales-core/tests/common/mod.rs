#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use vansales_core::{params::SignIn, ApiClient, ApiClientBuilder, Session};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const EMPLOYEE: &str = "Ravi Kumar";

/// Helper function to create a client pointed at a mock server
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClientBuilder::new()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(500))
        .build()
        .expect("Failed to build client")
}

pub fn credentials() -> SignIn {
    SignIn {
        username: "vansales_test01".to_string(),
        password: "password123".to_string(),
    }
}

pub fn user_json() -> Value {
    json!({
        "id": 7,
        "username": "vansales_test01",
        "role": "Sales Rep",
        "primaryEmployeeName": EMPLOYEE
    })
}

/// Plans as the server sends them: one for someone else, one inactive, one
/// current.
pub fn plans_json() -> Value {
    json!([
        {
            "primaryEmployee": "Someone Else",
            "status": "Active",
            "validFrom": "2024-03-01",
            "validTo": "2024-03-31",
            "customerIds": [1, 2, 3]
        },
        {
            "primaryEmployee": EMPLOYEE,
            "status": "Inactive",
            "validFrom": "2024-03-01",
            "validTo": "2024-03-31",
            "customerIds": [3]
        },
        {
            "primaryEmployee": EMPLOYEE,
            "status": "Active",
            "validFrom": "2024-03-01T00:00:00Z",
            "validTo": "2024-03-15",
            "customerIds": [1, "2", 4]
        }
    ])
}

pub fn customers_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Acme Mart",
            "customerCode": "WBD001",
            "visitCompleted": false,
            "zone": "North"
        },
        {
            "id": 2,
            "name": "Zen Stores",
            "customerCode": "WBD002",
            "visitCompleted": true,
            "salesAmount": 0,
            "visited": true
        },
        {
            "id": 3,
            "name": "Off Plan Traders",
            "visitCompleted": null
        },
        {
            "id": 4,
            "name": "Bharat General",
            "visitCompleted": true,
            "salesAmount": 500
        }
    ])
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/journey-plans/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(server)
        .await;
}

pub async fn mount_journey(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/journey-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plans_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/journey-plans/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers_json()))
        .mount(server)
        .await;
}

/// Helper function to sign in against a mock server with the login mounted
pub async fn signed_in(server: &MockServer) -> (ApiClient, Session) {
    mount_login(server).await;
    let client = client_for(server);
    let session = client
        .sign_in(&credentials())
        .await
        .expect("Failed to sign in");
    (client, session)
}
