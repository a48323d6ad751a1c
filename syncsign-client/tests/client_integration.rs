//! Client Integration Tests
//!
//! Runs the client against mocked cloud and hub endpoints:
//! - Catalog calls and the `data` envelope
//! - Cloud and direct-to-hub renders
//! - Silent cloud fallback
//! - Error statuses
//! - Hub credentials files

use std::io::Write;

use serde_json::json;
use syncsign_client::{ClientConfig, ClientError, HubCredential, HubCredentials, SyncSignClient};
use syncsign_core::{
    Block, DeviceDirectory, Hub, Node, NodeInfo, Route, StaticDirectory, Template, Textbox,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "account-key";

fn config(cloud: &MockServer) -> ClientConfig {
    ClientConfig::new(API_KEY).with_api_root(cloud.uri())
}

fn hub_credentials(sn: &str, hub: &MockServer) -> HubCredentials {
    let mut creds = HubCredentials::default();
    creds.insert(HubCredential {
        sn: sn.to_string(),
        address: hub.address().to_string(),
        key: "hub-key".to_string(),
    });
    creds
}

fn node_info(id: &str, model: &str) -> NodeInfo {
    NodeInfo {
        id: id.to_string(),
        name: None,
        model: model.to_string(),
        online: true,
        battery: None,
        signal: None,
    }
}

fn greeting() -> Template {
    Template::new().with_widget(
        Textbox::new(Block::new(16, 16, 192, 44), "roboto_slab", 24, "Hello, World!")
            .expect("valid textbox"),
    )
}

fn document(template: &Template, partial: bool) -> serde_json::Value {
    serde_json::to_value(template.to_document(partial)).expect("document")
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/devices")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"sn": "HUB-A", "info": {"friendlyName": "Office"}},
                {"sn": "HUB-B", "info": {}}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/devices/HUB-A/nodes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"nodeId": "n1", "name": "Desk", "onlined": true,
                 "batteryLevel": 90, "signalLevel": 70, "model": "D29R"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/devices/HUB-B/nodes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/nodes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"nodeId": "n1", "name": "Desk", "onlined": true, "model": "D29R"},
                {"nodeId": "n9", "name": "Loose", "onlined": false, "model": "D29"}
            ]
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_hubs_marks_direct_capable() {
    let cloud = MockServer::start().await;
    let hub = MockServer::start().await;
    mount_catalog(&cloud).await;

    let client = SyncSignClient::with_credentials(&config(&cloud), hub_credentials("HUB-A", &hub))
        .expect("client");
    let hubs = client.hubs().await.expect("hubs");

    assert_eq!(hubs.len(), 2);
    assert_eq!(hubs[0].name.as_deref(), Some("Office"));
    assert!(hubs[0].is_direct_capable());
    assert!(!hubs[1].is_direct_capable());
}

#[tokio::test]
async fn test_node_lookup_unwraps_envelope() {
    let cloud = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/nodes/n1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"nodeId": "n1", "onlined": true, "batteryLevel": 55, "model": "D75"}
        })))
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let info = client.node("n1").await.expect("node");
    assert_eq!(info.battery, Some(55));
    assert!(Node::new(info, None).has_colour());
}

#[tokio::test]
async fn test_ids_stay_inside_their_path_segment() {
    let cloud = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/nodes/a%2Fb%23c")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"nodeId": "a/b#c", "onlined": true, "model": "D29"}
        })))
        .expect(1)
        .mount(&cloud)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/devices/HUB%3F1/nodes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    assert_eq!(client.node("a/b#c").await.expect("node").id, "a/b#c");
    assert!(client.hub_nodes("HUB?1").await.expect("hub nodes").is_empty());
}

#[tokio::test]
async fn test_account_info_passthrough() {
    let cloud = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"email": "a@example.com"}})),
        )
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let info = client.account_info().await.expect("account");
    assert_eq!(info["email"], json!("a@example.com"));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let cloud = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/nodes")))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid key"))
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    match client.nodes().await {
        Err(ClientError::Api { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "invalid key");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_data_is_unexpected() {
    let cloud = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/key/{API_KEY}/devices")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    assert!(matches!(
        client.hubs().await,
        Err(ClientError::UnexpectedResponse(_))
    ));
}

#[tokio::test]
async fn test_directory_snapshot() {
    let cloud = MockServer::start().await;
    let hub = MockServer::start().await;
    mount_catalog(&cloud).await;

    let client = SyncSignClient::with_credentials(&config(&cloud), hub_credentials("HUB-A", &hub))
        .expect("client");
    let directory = client.directory().await.expect("snapshot");

    assert_eq!(directory.node_count(), 2);
    let desk = directory.resolve_node("n1").expect("n1");
    assert_eq!(desk.hub.as_ref().map(|h| h.sn.as_str()), Some("HUB-A"));
    assert!(directory.resolve_node("n9").expect("n9").hub.is_none());
    assert!(directory.list_nodes_for_hub("HUB-B").expect("hub").is_empty());
}

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test]
async fn test_cloud_render_posts_document() {
    let cloud = MockServer::start().await;
    let template = greeting();

    Mock::given(method("POST"))
        .and(path(format!("/key/{API_KEY}/nodes/n1/renders")))
        .and(header("content-type", "application/json"))
        .and(body_json(document(&template, false)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"renderId": "r1"}})))
        .expect(1)
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let receipt = client
        .render(&Node::new(node_info("n1", "D29"), None), &template, false)
        .await
        .expect("render");

    assert_eq!(receipt.route, Route::Cloud);
    assert_eq!(receipt.response["renderId"], json!("r1"));
}

#[tokio::test]
async fn test_partial_render_omits_background() {
    let cloud = MockServer::start().await;
    let template = greeting();
    let expected = document(&template, true);
    assert!(expected["layout"].get("background").is_none());

    Mock::given(method("POST"))
        .and(path(format!("/key/{API_KEY}/nodes/n1/renders")))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let receipt = client
        .render(&Node::new(node_info("n1", "D29"), None), &template, true)
        .await
        .expect("render");
    assert!(receipt.partial);
    assert!(receipt.response.is_null());
}

#[tokio::test]
async fn test_direct_render_goes_to_hub() {
    let cloud = MockServer::start().await;
    let hub = MockServer::start().await;
    let template = greeting();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&cloud)
        .await;
    Mock::given(method("POST"))
        .and(path("/key/hub-key/nodes/n1/renders"))
        .and(body_json(document(&template, false)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "ok"})))
        .expect(1)
        .mount(&hub)
        .await;

    let client = SyncSignClient::new(&config(&cloud).with_render_direct(true)).expect("client");
    let lan_hub = Hub::new("HUB-A", None).with_direct_access(hub.address().to_string(), "hub-key");
    let node = Node::new(node_info("n1", "D29R"), Some(lan_hub.into()));

    let receipt = client.render(&node, &template, false).await.expect("render");
    assert_eq!(receipt.route, Route::Direct);
}

#[tokio::test]
async fn test_direct_falls_back_to_cloud() {
    let cloud = MockServer::start().await;
    mount_catalog(&cloud).await;
    Mock::given(method("POST"))
        .and(path(format!("/key/{API_KEY}/nodes/n1/renders")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&cloud)
        .await;

    // Direct requested, but no credentials file: HUB-A is cloud-only.
    let client = SyncSignClient::new(&config(&cloud).with_render_direct(true)).expect("client");
    let directory = client.directory().await.expect("snapshot");
    let receipt = client
        .render_to(&directory, "n1", &greeting(), false)
        .await
        .expect("render");
    assert_eq!(receipt.route, Route::Cloud);
}

#[tokio::test]
async fn test_render_to_unknown_node_sends_nothing() {
    let cloud = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let directory = StaticDirectory::new();
    let err = client
        .render_to(&directory, "ghost", &greeting(), false)
        .await
        .expect_err("unknown node");
    assert!(matches!(err, ClientError::Directory(_)));
}

#[tokio::test]
async fn test_render_rejection_is_reported() {
    let cloud = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/key/{API_KEY}/nodes/n1/renders")))
        .respond_with(ResponseTemplate::new(500).set_body_string("renderer down"))
        .mount(&cloud)
        .await;

    let client = SyncSignClient::new(&config(&cloud)).expect("client");
    let err = client
        .render(&Node::new(node_info("n1", "D29"), None), &greeting(), false)
        .await
        .expect_err("server error");
    assert!(err.is_transient());
}

// ============================================================================
// Credentials file
// ============================================================================

#[tokio::test]
async fn test_credentials_file_enables_direct() {
    let cloud = MockServer::start().await;
    let hub = MockServer::start().await;
    mount_catalog(&cloud).await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "[[hub]]\nsn = \"HUB-A\"\naddress = \"{}\"\nkey = \"hub-key\"\n",
        hub.address()
    )
    .expect("write");

    let client = SyncSignClient::new(&config(&cloud).with_hubs_file(file.path())).expect("client");
    let hubs = client.hubs().await.expect("hubs");
    assert!(hubs.iter().any(|h| h.sn == "HUB-A" && h.is_direct_capable()));
}

#[test]
fn test_missing_credentials_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ClientConfig::new(API_KEY).with_hubs_file(dir.path().join("absent.toml"));
    assert!(matches!(
        SyncSignClient::new(&config),
        Err(ClientError::Config(_))
    ));
}
