//! Nodes driven end to end through the executor and the HTTP client.

use std::collections::HashMap;

use api_client::{ClientConfig, ConnectSafelyClient};
use nodes::{run_node, NodeRegistry, ParameterSource, StaticParameters};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workflow::{ApiCredential, ApiKey, BaseUrl, ItemIndex, NodeError};

/// Each item's JSON object is its parameter set.
struct ItemParameters;

impl ParameterSource for ItemParameters {
    fn parameters(&self, _index: ItemIndex, item: &Value) -> Result<Map<String, Value>, NodeError> {
        Ok(item.as_object().cloned().unwrap_or_default())
    }
}

fn client_for(server: &MockServer) -> ConnectSafelyClient {
    let credential =
        ApiCredential::new(ApiKey::new("secret").unwrap(), Some(&server.uri())).unwrap();
    ConnectSafelyClient::new(credential, &ClientConfig::default()).unwrap()
}

async fn mount_boost(server: &MockServer, post_url: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/posts/boost"))
        .and(header("authorization", "Bearer secret"))
        .and(body_json(json!({"postUrl": post_url, "duration": 24, "budget": 10})))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn boost_post_with_defaults() {
    let server = MockServer::start().await;
    mount_boost(
        &server,
        "https://www.linkedin.com/posts/x",
        ResponseTemplate::new(200).set_body_json(json!({"boosted": true})),
    )
    .await;

    let registry = NodeRegistry::new();
    let node = registry.get("connectSafely").unwrap();
    let items = vec![json!({
        "resource": "post",
        "operation": "boost",
        "postUrl": "https://www.linkedin.com/posts/x",
    })];

    let output = run_node(node, &ItemParameters, &client_for(&server), &items, false)
        .await
        .unwrap();

    assert_eq!(output.results.len(), 1);
    assert_eq!(output.summary.succeeded, 1);
    assert_eq!(
        serde_json::to_value(&output.results).unwrap(),
        json!([{"json": {"boosted": true}, "pairedItem": {"item": 0}}])
    );
}

#[tokio::test]
async fn continue_on_fail_records_http_errors() {
    let server = MockServer::start().await;
    mount_boost(
        &server,
        "https://www.linkedin.com/posts/ok",
        ResponseTemplate::new(200).set_body_json(json!({"boosted": true})),
    )
    .await;
    mount_boost(
        &server,
        "https://www.linkedin.com/posts/gone",
        ResponseTemplate::new(404).set_body_json(json!({"message": "Post not found"})),
    )
    .await;

    let registry = NodeRegistry::new();
    let node = registry.get("connectSafely").unwrap();
    let items = vec![
        json!({"resource": "post", "operation": "boost", "postUrl": "https://www.linkedin.com/posts/ok"}),
        json!({"resource": "post", "operation": "boost", "postUrl": "https://www.linkedin.com/posts/gone"}),
    ];

    let output = run_node(node, &ItemParameters, &client_for(&server), &items, true)
        .await
        .unwrap();

    assert_eq!(output.results.len(), 2);
    assert_eq!(output.summary.failed, 1);
    assert!(output.results[1].is_failure());
    assert_eq!(
        output.results[1].payload(),
        json!({
            "error": "Request failed with status code 404",
            "statusCode": 404,
            "apiError": {"message": "Post not found"},
        })
    );
    assert_eq!(
        serde_json::to_value(&output.results[1]).unwrap()["pairedItem"],
        json!({"item": 1})
    );
}

#[tokio::test]
async fn http_error_aborts_without_continue_on_fail() {
    let server = MockServer::start().await;
    mount_boost(
        &server,
        "https://www.linkedin.com/posts/ok",
        ResponseTemplate::new(200).set_body_json(json!({"boosted": true})),
    )
    .await;
    mount_boost(
        &server,
        "https://www.linkedin.com/posts/gone",
        ResponseTemplate::new(404).set_body_json(json!({"message": "Post not found"})),
    )
    .await;

    let registry = NodeRegistry::new();
    let node = registry.get("connectSafely").unwrap();
    let items = vec![
        json!({"resource": "post", "operation": "boost", "postUrl": "https://www.linkedin.com/posts/ok"}),
        json!({"resource": "post", "operation": "boost", "postUrl": "https://www.linkedin.com/posts/gone"}),
    ];

    let aborted = run_node(node, &ItemParameters, &client_for(&server), &items, false)
        .await
        .unwrap_err();

    assert_eq!(aborted.failed_item, ItemIndex::new(1));
    assert_eq!(aborted.completed.len(), 1);
    assert!(aborted
        .to_string()
        .starts_with("ConnectSafely API Error (Status: 404): Post not found\n\nFull error details: {"));
}

#[tokio::test]
async fn validation_errors_abort_even_with_continue_on_fail() {
    let server = MockServer::start().await;
    let registry = NodeRegistry::with_overrides(&HashMap::from([(
        "connectSafelyLinkedIn".to_owned(),
        server.uri(),
    )]));
    let node = registry.get("connectSafelyLinkedIn").unwrap();
    let items = vec![json!({"operation": "scrapePost", "postUrl": "https://example.com/not-linkedin"})];

    let aborted = run_node(node, &ItemParameters, &client_for(&server), &items, true)
        .await
        .unwrap_err();

    assert!(matches!(aborted.error, NodeError::Validation { .. }));
    assert!(aborted.completed.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn fixed_base_node_follows_user_with_static_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/linkedin/follow"))
        .and(body_json(json!({"accountId": "acc-9", "profileId": "jane-doe", "action": "follow"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"following": true})))
        .expect(2)
        .mount(&server)
        .await;

    let registry =
        NodeRegistry::with_overrides(&HashMap::from([("linkedInActions".to_owned(), server.uri())]));
    let node = registry.get("linkedInActions").unwrap();
    assert_eq!(node.description().base_url, BaseUrl::Fixed(server.uri()));

    let params = json!({"operation": "followUser", "accountId": "acc-9", "profileId": "jane-doe"});
    let source = StaticParameters(params.as_object().cloned().unwrap());
    let items = vec![json!({}), json!({})];

    let output = run_node(node, &source, &client_for(&server), &items, false)
        .await
        .unwrap();
    let paired: Vec<Value> = serde_json::to_value(&output.results)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["pairedItem"]["item"].clone())
        .collect();
    assert_eq!(paired, vec![json!(0), json!(1)]);
}
