//! Directory snapshot built from the cloud catalog.

use syncsign_core::{DeviceDirectory, StaticDirectory};
use tracing::info;

use crate::{ClientResult, SyncSignClient};

/// Fetch every hub and its nodes, plus any node not listed under a hub.
///
/// Hubs carry the LAN credentials the client was configured with, so the
/// snapshot is ready for direct-render routing.
///
/// # Errors
///
/// Returns the first failed catalog call.
pub async fn fetch_directory(client: &SyncSignClient) -> ClientResult<StaticDirectory> {
    let mut directory = StaticDirectory::new();

    for hub in client.hubs().await? {
        let sn = hub.sn.clone();
        let nodes = client.hub_nodes(&sn).await?;
        directory.insert_hub(hub);
        for node in nodes {
            directory.insert_node(node, Some(&sn));
        }
    }

    for node in client.nodes().await? {
        if directory.resolve_node(&node.id).is_err() {
            directory.insert_node(node, None);
        }
    }

    info!(
        hubs = directory.hubs().count(),
        nodes = directory.node_count(),
        "directory snapshot ready"
    );
    Ok(directory)
}
