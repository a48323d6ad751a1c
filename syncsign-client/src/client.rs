//! Client for the SyncSign HTTP API.
//!
//! Catalog calls (account, hubs, nodes) always go to the cloud. Renders go
//! wherever the [`RenderRouter`] points them: the cloud, or the node's hub
//! when direct rendering is enabled and the hub's LAN credentials are known.
//!
//! Every response body is wrapped as `{"data": ...}`; the helpers here
//! unwrap that envelope.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use syncsign_core::{
    DeviceDirectory, Endpoint, Hub, Node, NodeInfo, RenderRouter, Route, StaticDirectory, Template,
};
use tracing::debug;

use crate::config::{ClientConfig, HubCredentials};
use crate::{ClientError, ClientResult};

/// Outcome of a render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReceipt {
    /// Node the layout was sent to.
    pub node_id: String,
    /// Path the request took.
    pub route: Route,
    /// Whether the page background was left untouched.
    pub partial: bool,
    /// The `data` payload of the response, `null` if there was none.
    pub response: Value,
}

/// Asynchronous SyncSign client.
#[derive(Clone)]
pub struct SyncSignClient {
    inner: Arc<InnerClient>,
}

struct InnerClient {
    http: Client,
    router: RenderRouter,
    credentials: HubCredentials,
    render_direct: bool,
}

impl SyncSignClient {
    /// Create a client, loading hub credentials if the config names a file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the API root is malformed,
    /// [`ClientError::Config`] if the credentials file cannot be read, and
    /// [`ClientError::Http`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let credentials = config.load_credentials()?;
        Self::with_credentials(config, credentials)
    }

    /// Create a client with credentials supplied by the caller.
    ///
    /// # Errors
    ///
    /// As [`SyncSignClient::new`], minus file loading.
    pub fn with_credentials(
        config: &ClientConfig,
        credentials: HubCredentials,
    ) -> ClientResult<Self> {
        let router = RenderRouter::new(&config.api_root, &config.api_key)?;
        let http = Client::builder()
            .user_agent(concat!("syncsign-client/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(InnerClient {
                http,
                router,
                credentials,
                render_direct: config.render_direct,
            }),
        })
    }

    /// Whether renders try the hub first.
    #[must_use]
    pub fn direct_rendering(&self) -> bool {
        self.inner.render_direct
    }

    /// The router used for renders.
    #[must_use]
    pub fn router(&self) -> &RenderRouter {
        &self.inner.router
    }

    /// Account details, as returned by the service.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or payload error.
    pub async fn account_info(&self) -> ClientResult<Value> {
        self.get(&[]).await
    }

    /// Every hub on the account, with LAN credentials attached where known.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or payload error.
    pub async fn hubs(&self) -> ClientResult<Vec<Hub>> {
        let records: Vec<HubRecord> = self.get(&["devices"]).await?;
        Ok(records
            .into_iter()
            .map(|r| self.inner.credentials.apply(r.into()))
            .collect())
    }

    /// Every node on the account.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or payload error.
    pub async fn nodes(&self) -> ClientResult<Vec<NodeInfo>> {
        let records: Vec<NodeRecord> = self.get(&["nodes"]).await?;
        Ok(records.into_iter().map(NodeInfo::from).collect())
    }

    /// A single node.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or payload error; an unknown id surfaces
    /// as whatever status the service uses for it.
    pub async fn node(&self, node_id: &str) -> ClientResult<NodeInfo> {
        let record: NodeRecord = self.get(&["nodes", node_id]).await?;
        Ok(record.into())
    }

    /// Nodes served by hub `sn`.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or payload error.
    pub async fn hub_nodes(&self, sn: &str) -> ClientResult<Vec<NodeInfo>> {
        let records: Vec<NodeRecord> = self.get(&["devices", sn, "nodes"]).await?;
        Ok(records.into_iter().map(NodeInfo::from).collect())
    }

    /// Snapshot hubs and nodes into an in-memory directory.
    ///
    /// # Errors
    ///
    /// Returns the first failed catalog call.
    pub async fn directory(&self) -> ClientResult<StaticDirectory> {
        crate::directory::fetch_directory(self).await
    }

    /// Compile `template` and send it to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Layout`] if the template does not serialize,
    /// otherwise a transport, status or payload error.
    pub async fn render(
        &self,
        node: &Node,
        template: &Template,
        partial: bool,
    ) -> ClientResult<RenderReceipt> {
        let body = template.serialize(partial)?;
        let endpoint = self.inner.router.resolve(node, self.inner.render_direct);
        self.post_render(&endpoint, node.id(), body, partial).await
    }

    /// Look `node_id` up in `directory`, then render to it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Directory`] if the lookup fails, otherwise as
    /// [`SyncSignClient::render`].
    pub async fn render_to(
        &self,
        directory: &dyn DeviceDirectory,
        node_id: &str,
        template: &Template,
        partial: bool,
    ) -> ClientResult<RenderReceipt> {
        let body = template.serialize(partial)?;
        let (node, endpoint) = self
            .inner
            .router
            .resolve_id(directory, node_id, self.inner.render_direct)?;
        self.post_render(&endpoint, node.id(), body, partial).await
    }

    async fn post_render(
        &self,
        endpoint: &Endpoint,
        node_id: &str,
        body: String,
        partial: bool,
    ) -> ClientResult<RenderReceipt> {
        let url = endpoint.url(&["nodes", node_id, "renders"])?;
        let path = format!("nodes/{node_id}/renders");
        debug!(
            node = node_id,
            route = ?endpoint.route,
            partial,
            bytes = body.len(),
            "POST render"
        );

        let response = self
            .inner
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let data: Option<Value> = Self::read_envelope(response, &path).await?;

        Ok(RenderReceipt {
            node_id: node_id.to_string(),
            route: endpoint.route,
            partial,
            response: data.unwrap_or(Value::Null),
        })
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.inner.router.cloud_endpoint().url(segments)?;
        let path = segments.join("/");
        debug!(path = %path, "GET");
        let response = self.inner.http.get(url).send().await?;
        Self::read_envelope(response, &path)
            .await?
            .ok_or_else(|| ClientError::UnexpectedResponse(format!("{path}: missing data")))
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: Response,
        path: &str,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(path, status = status.as_u16(), "request rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim().is_empty() {
            return Ok(None);
        }
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct HubRecord {
    sn: String,
    #[serde(default)]
    info: HubRecordInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HubRecordInfo {
    #[serde(default)]
    friendly_name: Option<String>,
}

impl From<HubRecord> for Hub {
    fn from(record: HubRecord) -> Self {
        Hub::new(record.sn, record.info.friendly_name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    node_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    onlined: bool,
    #[serde(default)]
    battery_level: Option<u8>,
    #[serde(default)]
    signal_level: Option<u8>,
    #[serde(default)]
    model: String,
}

impl From<NodeRecord> for NodeInfo {
    fn from(record: NodeRecord) -> Self {
        NodeInfo {
            id: record.node_id,
            name: record.name,
            model: record.model,
            online: record.onlined,
            battery: record.battery_level,
            signal: record.signal_level,
        }
    }
}
