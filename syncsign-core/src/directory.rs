//! Device directory: resolves ids to hub and node records.
//!
//! The router only needs read access to these records. How they are found
//! (cloud API, config file, cache) belongs to the implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{DirectoryError, Hub, Node, NodeInfo};

/// Lookup of hubs and nodes.
pub trait DeviceDirectory: Send + Sync {
    /// Resolve a hub by serial number.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::HubNotFound`] or a backend failure.
    fn resolve_hub(&self, sn: &str) -> Result<Arc<Hub>, DirectoryError>;

    /// Resolve a node by id, including its hub when known.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NodeNotFound`] or a backend failure.
    fn resolve_node(&self, node_id: &str) -> Result<Node, DirectoryError>;

    /// Every node served by the hub `sn`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::HubNotFound`] or a backend failure.
    fn list_nodes_for_hub(&self, sn: &str) -> Result<Vec<Node>, DirectoryError>;
}

/// A directory held in memory, typically a snapshot of the cloud catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    hubs: BTreeMap<String, Arc<Hub>>,
    nodes: BTreeMap<String, (NodeInfo, Option<String>)>,
}

impl StaticDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a hub.
    pub fn insert_hub(&mut self, hub: Hub) {
        self.hubs.insert(hub.sn.clone(), Arc::new(hub));
    }

    /// Add or replace a node, optionally attached to hub `hub_sn`.
    pub fn insert_node(&mut self, info: NodeInfo, hub_sn: Option<&str>) {
        self.nodes
            .insert(info.id.clone(), (info, hub_sn.map(str::to_string)));
    }

    /// Every hub, ordered by serial number.
    #[must_use]
    pub fn hubs(&self) -> impl Iterator<Item = &Arc<Hub>> {
        self.hubs.values()
    }

    /// Number of known nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, info: &NodeInfo, hub_sn: Option<&String>) -> Node {
        let hub = hub_sn.and_then(|sn| self.hubs.get(sn)).cloned();
        Node::new(info.clone(), hub)
    }
}

impl DeviceDirectory for StaticDirectory {
    fn resolve_hub(&self, sn: &str) -> Result<Arc<Hub>, DirectoryError> {
        self.hubs
            .get(sn)
            .cloned()
            .ok_or_else(|| DirectoryError::HubNotFound(sn.to_string()))
    }

    fn resolve_node(&self, node_id: &str) -> Result<Node, DirectoryError> {
        self.nodes
            .get(node_id)
            .map(|(info, hub_sn)| self.node(info, hub_sn.as_ref()))
            .ok_or_else(|| DirectoryError::NodeNotFound(node_id.to_string()))
    }

    fn list_nodes_for_hub(&self, sn: &str) -> Result<Vec<Node>, DirectoryError> {
        if !self.hubs.contains_key(sn) {
            return Err(DirectoryError::HubNotFound(sn.to_string()));
        }
        Ok(self
            .nodes
            .values()
            .filter(|(_, hub_sn)| hub_sn.as_deref() == Some(sn))
            .map(|(info, hub_sn)| self.node(info, hub_sn.as_ref()))
            .collect())
    }
}
