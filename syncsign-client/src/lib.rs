//! # SyncSign Client
//!
//! Talks to the SyncSign cloud API and, when configured, directly to hubs on
//! the local network.
//!
//! ```text
//!  Template ──serialize──▶ RenderRouter ──┬──▶ https://api.sync-sign.com/v2/key/{api key}
//!                                         └──▶ http://{hub address}/key/{hub key}
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod demo;
pub mod directory;
pub mod error;

pub use client::{RenderReceipt, SyncSignClient};
pub use config::{ClientConfig, HubCredential, HubCredentials, DEFAULT_TIMEOUT};
pub use directory::fetch_directory;
pub use error::{ClientError, ClientResult};
