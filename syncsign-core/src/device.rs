//! Hubs and display nodes as reported by the device directory.

use std::fmt;
use std::sync::Arc;

/// Display models that can show red ink.
pub const COLOUR_MODELS: &[&str] = &["D29R", "D75"];

/// A hub that relays renders to its nodes.
#[derive(Clone, PartialEq, Eq)]
pub struct Hub {
    /// Serial number.
    pub sn: String,
    /// Friendly name, if one was set in the portal.
    pub name: Option<String>,
    /// LAN address (`host` or `host:port`) for direct rendering.
    pub direct_address: Option<String>,
    /// Local API key for direct rendering.
    pub direct_credential: Option<String>,
}

impl Hub {
    /// Create a hub known only through the cloud.
    #[must_use]
    pub fn new(sn: impl Into<String>, name: Option<String>) -> Self {
        Self {
            sn: sn.into(),
            name,
            direct_address: None,
            direct_credential: None,
        }
    }

    /// Attach the LAN address and local key used for direct rendering.
    #[must_use]
    pub fn with_direct_access(
        mut self,
        address: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        self.direct_address = Some(address.into());
        self.direct_credential = Some(credential.into());
        self
    }

    /// Both a LAN address and a local key are known.
    #[must_use]
    pub fn is_direct_capable(&self) -> bool {
        matches!(
            (&self.direct_address, &self.direct_credential),
            (Some(addr), Some(key)) if !addr.is_empty() && !key.is_empty()
        )
    }
}

// The local key is a secret; keep it out of logs.
impl fmt::Debug for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("sn", &self.sn)
            .field("name", &self.name)
            .field("direct_address", &self.direct_address)
            .field(
                "direct_credential",
                &self.direct_credential.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Directory facts about a display node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Node id.
    pub id: String,
    /// Friendly name.
    pub name: Option<String>,
    /// Model code, e.g. `D29R`.
    pub model: String,
    /// Whether the node was online at the last check-in.
    pub online: bool,
    /// Battery level, 0-100.
    pub battery: Option<u8>,
    /// Signal level, 0-100.
    pub signal: Option<u8>,
}

/// A display node together with the hub that serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Directory facts.
    pub info: NodeInfo,
    /// Owning hub, when the directory knows it. Read-only for routing.
    pub hub: Option<Arc<Hub>>,
}

impl Node {
    /// Pair node facts with their hub.
    #[must_use]
    pub fn new(info: NodeInfo, hub: Option<Arc<Hub>>) -> Self {
        Self { info, hub }
    }

    /// Node id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// The panel can show colours other than black and white.
    #[must_use]
    pub fn has_colour(&self) -> bool {
        COLOUR_MODELS.contains(&self.info.model.as_str())
    }

    /// The node was online at the last check-in.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.info.online
    }
}
