//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server returns

use std::process::Command;

use serde_json::json;
use vansales_core::{display::CustomerList, models::Customer};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn customer_json() -> serde_json::Value {
    json!({
        "id": "C-17",
        "name": "Sharma Traders",
        "customerCode": "WBD017",
        "stockistName": "Kolkata Distributors",
        "zone": "East",
        "townName": "Howrah",
        "dealerCategory": "Gold",
        "shopCategory": "Grocery",
        "visitFrequency": "Weekly",
        "contactNo": "9830012345",
        "lastOrder": 1250.5,
        "avgOrder": "980.00",
        "visitCompleted": false
    })
}

/// Run a CLI command and capture its output
fn run_cli_command(server_uri: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vansales"));
    cmd.env_remove("VANSALES_API_URL")
        .arg("--no-color")
        .arg("--api-url")
        .arg(server_uri);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_customer_display_consistency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/journey-plans/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([customer_json()])))
        .mount(&server)
        .await;

    let cli_output = run_cli_command(&server.uri(), &["customer", "show", "C-17"]);

    let customer: Customer = serde_json::from_value(customer_json()).unwrap();
    assert_eq!(cli_output, customer.to_string());
    assert!(cli_output.contains("- Dealer Category: Gold"));
    assert!(cli_output.contains("- Last Order: INR 1250.5"));
}

#[test]
fn test_empty_list_display() {
    let output = CustomerList(vec![]).to_string();
    assert_eq!(output, "No customers found in this section\n");
}
