//! Client configuration and the hub credentials file.
//!
//! Direct rendering needs each hub's LAN address and local key, neither of
//! which the cloud API reports. They live in a TOML file:
//!
//! ```toml
//! [[hub]]
//! sn = "0012345678"
//! address = "192.168.1.20"
//! key = "local-api-key"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use syncsign_core::{Hub, DEFAULT_API_ROOT};

use crate::{ClientError, ClientResult};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a [`crate::SyncSignClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Account API key from the SyncSign portal.
    pub api_key: String,
    /// Cloud API root, normally [`DEFAULT_API_ROOT`].
    pub api_root: String,
    /// Try to render straight to the hub when it is direct-capable.
    pub render_direct: bool,
    /// Hub credentials file, if any.
    pub hubs_file: Option<PathBuf>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `api_key` with cloud-only rendering.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_root: DEFAULT_API_ROOT.to_string(),
            render_direct: false,
            hubs_file: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different cloud API root.
    #[must_use]
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Prefer direct-to-hub rendering.
    #[must_use]
    pub fn with_render_direct(mut self, render_direct: bool) -> Self {
        self.render_direct = render_direct;
        self
    }

    /// Read hub credentials from `path`.
    #[must_use]
    pub fn with_hubs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.hubs_file = Some(path.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the configured hub credentials, or none if no file is set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the file cannot be read or parsed.
    pub fn load_credentials(&self) -> ClientResult<HubCredentials> {
        match &self.hubs_file {
            Some(path) => HubCredentials::load(path),
            None => Ok(HubCredentials::default()),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_root", &self.api_root)
            .field("render_direct", &self.render_direct)
            .field("hubs_file", &self.hubs_file)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// LAN access details for one hub.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HubCredential {
    /// Hub serial number.
    pub sn: String,
    /// `host` or `host:port` on the local network.
    pub address: String,
    /// Local API key.
    pub key: String,
}

impl fmt::Debug for HubCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubCredential")
            .field("sn", &self.sn)
            .field("address", &self.address)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Contents of the hub credentials file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HubCredentials {
    #[serde(default, rename = "hub")]
    hubs: Vec<HubCredential>,
}

impl HubCredentials {
    /// Parse credentials from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for malformed TOML.
    pub fn from_toml(text: &str) -> ClientResult<Self> {
        toml::from_str(text).map_err(|e| ClientError::Config(format!("hub credentials: {e}")))
    }

    /// Read and parse the credentials file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the file is unreadable or malformed.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        let credentials = Self::from_toml(&text)?;
        tracing::debug!(
            path = %path.display(),
            hubs = credentials.len(),
            "loaded hub credentials"
        );
        Ok(credentials)
    }

    /// Add an entry.
    pub fn insert(&mut self, credential: HubCredential) {
        self.hubs.push(credential);
    }

    /// Credentials for hub `sn`. The first matching entry wins.
    #[must_use]
    pub fn get(&self, sn: &str) -> Option<&HubCredential> {
        self.hubs.iter().find(|c| c.sn == sn)
    }

    /// Attach LAN access to `hub` if credentials for it are known.
    #[must_use]
    pub fn apply(&self, hub: Hub) -> Hub {
        match self.get(&hub.sn) {
            Some(c) => hub.with_direct_access(c.address.clone(), c.key.clone()),
            None => hub,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    /// No entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hub_tables() {
        let creds = HubCredentials::from_toml(
            r#"
            [[hub]]
            sn = "A1"
            address = "192.168.1.20"
            key = "k1"

            [[hub]]
            sn = "B2"
            address = "hub.local:8080"
            key = "k2"
            "#,
        )
        .expect("valid toml");

        assert_eq!(creds.len(), 2);
        assert_eq!(creds.get("B2").map(|c| c.address.as_str()), Some("hub.local:8080"));
        assert!(creds.get("C3").is_none());
    }

    #[test]
    fn test_empty_file_means_no_direct_hubs() {
        let creds = HubCredentials::from_toml("").expect("empty is fine");
        assert!(creds.is_empty());
        assert!(!creds.apply(Hub::new("A1", None)).is_direct_capable());
    }

    #[test]
    fn test_apply_makes_hub_direct_capable() {
        let mut creds = HubCredentials::default();
        creds.insert(HubCredential {
            sn: "A1".to_string(),
            address: "192.168.1.20".to_string(),
            key: "secret".to_string(),
        });
        let hub = creds.apply(Hub::new("A1", None));
        assert!(hub.is_direct_capable());
        assert!(!format!("{creds:?}").contains("secret"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = HubCredentials::from_toml("[[hub]]\nsn = \"A\"\naddr = \"x\"\nkey = \"k\"\n")
            .expect_err("addr is not a field");
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ClientConfig::new("account-secret").with_render_direct(true);
        let debug = format!("{config:?}");
        assert!(!debug.contains("account-secret"));
        assert!(debug.contains("render_direct: true"));
    }
}
