//! Render routing: cloud API or straight to the hub on the LAN.
//!
//! Direct rendering is best effort. When it is requested but the node's hub
//! has no usable LAN address and key, the render goes to the cloud instead.

use url::Url;

use crate::{DeviceDirectory, DirectoryError, Hub, Node, RouterError};

/// Root of the SyncSign cloud API.
pub const DEFAULT_API_ROOT: &str = "https://api.sync-sign.com/v2";

/// Which path a render takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Through the cloud service with the account key.
    Cloud,
    /// Straight to the hub with its local key.
    Direct,
}

/// Where to send API requests, and with which key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL; request path segments such as `nodes/{id}/renders` are
    /// appended.
    pub base_url: Url,
    /// Key embedded in the base URL.
    pub credential: String,
    /// Path taken.
    pub route: Route,
}

impl Endpoint {
    fn new(base: &str, credential: &str, route: Route) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base)?;
        push_segments(&mut base_url, &["key", credential])?;
        Ok(Self {
            base_url,
            credential: credential.to_string(),
            route,
        })
    }

    /// Full URL for an API path given as segments, e.g. `["nodes", id]`.
    ///
    /// Each segment is percent-encoded, so ids containing `/`, `?` or `#`
    /// stay inside their segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn url(&self, segments: &[&str]) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.clone();
        push_segments(&mut url, segments)?;
        Ok(url)
    }
}

fn push_segments(url: &mut Url, segments: &[&str]) -> Result<(), url::ParseError> {
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

/// Chooses the endpoint for each render.
#[derive(Debug, Clone)]
pub struct RenderRouter {
    cloud: Endpoint,
}

impl RenderRouter {
    /// Create a router for the account `api_key` under `api_root`
    /// (normally [`DEFAULT_API_ROOT`]).
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidUrl`] if the cloud endpoint cannot be
    /// formed.
    pub fn new(api_root: &str, api_key: &str) -> Result<Self, RouterError> {
        let cloud =
            Endpoint::new(api_root, api_key, Route::Cloud).map_err(|source| {
                RouterError::InvalidUrl {
                    url: api_root.to_string(),
                    source,
                }
            })?;
        Ok(Self { cloud })
    }

    /// The account's cloud endpoint.
    #[must_use]
    pub fn cloud_endpoint(&self) -> &Endpoint {
        &self.cloud
    }

    /// Pick the endpoint for rendering to `node`.
    ///
    /// Never fails: a missing or unusable hub setup falls back to the cloud.
    #[must_use]
    pub fn resolve(&self, node: &Node, direct_requested: bool) -> Endpoint {
        if !direct_requested {
            return self.cloud.clone();
        }

        let Some(hub) = node.hub.as_deref() else {
            tracing::debug!(node = node.id(), "no hub known for node, rendering via cloud");
            return self.cloud.clone();
        };

        match direct_endpoint(hub) {
            Some(endpoint) => {
                tracing::debug!(node = node.id(), hub = %hub.sn, "rendering direct to hub");
                endpoint
            }
            None => {
                tracing::debug!(
                    node = node.id(),
                    hub = %hub.sn,
                    "hub is not direct-rendering capable, rendering via cloud"
                );
                self.cloud.clone()
            }
        }
    }

    /// Look `node_id` up in `directory` and pick its endpoint.
    ///
    /// # Errors
    ///
    /// Directory failures are returned unchanged.
    pub fn resolve_id(
        &self,
        directory: &dyn DeviceDirectory,
        node_id: &str,
        direct_requested: bool,
    ) -> Result<(Node, Endpoint), DirectoryError> {
        let node = directory.resolve_node(node_id)?;
        let endpoint = self.resolve(&node, direct_requested);
        Ok((node, endpoint))
    }
}

fn direct_endpoint(hub: &Hub) -> Option<Endpoint> {
    if !hub.is_direct_capable() {
        return None;
    }
    let address = hub.direct_address.as_deref()?;
    let key = hub.direct_credential.as_deref()?;

    match Endpoint::new(&format!("http://{address}"), key, Route::Direct) {
        Ok(endpoint) => Some(endpoint),
        Err(e) => {
            tracing::warn!(hub = %hub.sn, address, "unusable hub address: {e}");
            None
        }
    }
}
