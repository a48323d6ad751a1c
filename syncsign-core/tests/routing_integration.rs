//! Routing Integration Tests
//!
//! Resolves nodes through a [`StaticDirectory`] and checks which endpoint
//! each render would use.

use std::sync::{Arc, Mutex};

use syncsign_core::{
    DeviceDirectory, DirectoryError, Hub, Node, NodeInfo, RenderRouter, Route, StaticDirectory,
    DEFAULT_API_ROOT,
};

fn info(id: &str, model: &str) -> NodeInfo {
    NodeInfo {
        id: id.to_string(),
        name: None,
        model: model.to_string(),
        online: true,
        battery: Some(100),
        signal: Some(75),
    }
}

fn directory() -> StaticDirectory {
    let mut dir = StaticDirectory::new();
    dir.insert_hub(Hub::new("LAN-HUB", None).with_direct_access("10.0.0.7:8080", "local-key"));
    dir.insert_hub(Hub::new("CLOUD-HUB", Some("Lobby".to_string())));
    dir.insert_node(info("desk", "D29R"), Some("LAN-HUB"));
    dir.insert_node(info("lobby", "D75"), Some("CLOUD-HUB"));
    dir.insert_node(info("stray", "D29"), None);
    dir
}

fn router() -> RenderRouter {
    RenderRouter::new(DEFAULT_API_ROOT, "account-key").expect("valid root")
}

#[test]
fn test_direct_capable_hub_routes_to_lan() {
    let (node, endpoint) = router()
        .resolve_id(&directory(), "desk", true)
        .expect("known node");

    assert!(node.has_colour());
    assert_eq!(endpoint.route, Route::Direct);
    assert_eq!(
        endpoint.url(&["nodes", "desk", "renders"]).expect("url").as_str(),
        "http://10.0.0.7:8080/key/local-key/nodes/desk/renders"
    );
}

#[test]
fn test_cloud_fallback_is_silent() {
    for id in ["lobby", "stray"] {
        let (_, endpoint) = router()
            .resolve_id(&directory(), id, true)
            .expect("known node");
        assert_eq!(endpoint.route, Route::Cloud, "node {id}");
        assert_eq!(endpoint.credential, "account-key");
    }
}

#[test]
fn test_directory_errors_propagate() {
    let err = router()
        .resolve_id(&directory(), "ghost", true)
        .expect_err("unknown node");
    assert_eq!(err, DirectoryError::NodeNotFound("ghost".to_string()));
}

/// Directory whose backend is down.
struct Offline;

impl DeviceDirectory for Offline {
    fn resolve_hub(&self, _sn: &str) -> Result<Arc<Hub>, DirectoryError> {
        Err(DirectoryError::Unavailable("offline".to_string()))
    }

    fn resolve_node(&self, _node_id: &str) -> Result<Node, DirectoryError> {
        Err(DirectoryError::Unavailable("offline".to_string()))
    }

    fn list_nodes_for_hub(&self, _sn: &str) -> Result<Vec<Node>, DirectoryError> {
        Err(DirectoryError::Unavailable("offline".to_string()))
    }
}

#[test]
fn test_backend_failure_is_not_a_fallback() {
    let result = router().resolve_id(&Offline, "desk", false);
    assert!(matches!(result, Err(DirectoryError::Unavailable(_))));
}

/// Counts lookups so the test can check the router asks exactly once.
#[derive(Default)]
struct Counting {
    inner: StaticDirectory,
    lookups: Mutex<usize>,
}

impl DeviceDirectory for Counting {
    fn resolve_hub(&self, sn: &str) -> Result<Arc<Hub>, DirectoryError> {
        self.inner.resolve_hub(sn)
    }

    fn resolve_node(&self, node_id: &str) -> Result<Node, DirectoryError> {
        if let Ok(mut n) = self.lookups.lock() {
            *n += 1;
        }
        self.inner.resolve_node(node_id)
    }

    fn list_nodes_for_hub(&self, sn: &str) -> Result<Vec<Node>, DirectoryError> {
        self.inner.list_nodes_for_hub(sn)
    }
}

#[test]
fn test_single_lookup_per_render() {
    let dir = Counting {
        inner: directory(),
        ..Counting::default()
    };
    router().resolve_id(&dir, "desk", true).expect("known node");
    assert_eq!(*dir.lookups.lock().expect("lock"), 1);
}

#[test]
fn test_hub_listing_shares_hub_record() {
    let dir = directory();
    let nodes = dir.list_nodes_for_hub("LAN-HUB").expect("hub");
    let hub = dir.resolve_hub("LAN-HUB").expect("hub");
    assert_eq!(nodes.len(), 1);
    assert!(Arc::ptr_eq(nodes[0].hub.as_ref().expect("linked"), &hub));
}
