//! # SyncSign Core
//!
//! Layout model for SyncSign e-paper displays.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                syncsign-core                │
//! ├─────────────────────────────────────────────┤
//! │  Widgets         │  Template                │
//! │  - Validation    │  - Drawing order         │
//! │  - Fonts/Icons   │  - Wire document         │
//! ├─────────────────────────────────────────────┤
//! │  Devices         │  Render Router           │
//! │  - Hubs / Nodes  │  - Cloud endpoint        │
//! │  - Directory     │  - Direct-to-hub         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Widgets are checked against the panel's constraints when they are built;
//! a [`Template`] of widgets compiles to the JSON document the remote
//! renderer consumes, and the [`RenderRouter`] decides where to send it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blueprint;
pub mod device;
pub mod directory;
pub mod error;
pub mod fonts;
pub mod primitives;
pub mod router;
pub mod symbols;
pub mod template;
pub mod widget;

pub use blueprint::{TemplateBlueprint, WidgetBlueprint};
pub use device::{Hub, Node, NodeInfo, COLOUR_MODELS};
pub use directory::{DeviceDirectory, StaticDirectory};
pub use error::{DirectoryError, LayoutError, LayoutResult, RouterError};
pub use fonts::{Font, FontFace, FONTS};
pub use primitives::{Block, Color, Pattern, Point, TextAlign};
pub use router::{Endpoint, RenderRouter, Route, DEFAULT_API_ROOT};
pub use symbols::SymbolSet;
pub use template::{
    Background, Layout, LayoutDocument, LayoutOptions, Template, DEFAULT_POLL_RATE_MS,
};
pub use widget::{
    ButtonLabels, ButtonStyle, Circle, EccLevel, Line, QrCode, Rectangle, Symbolbox, Textbox,
    Widget, WireItem,
};

/// SyncSign core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
