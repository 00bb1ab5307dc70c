//! Async Rust client for the Sumo Logic management REST API.
//!
//! The entry point is [`Client`]: construct it with [`Credentials`] and it
//! resolves your account's regional endpoint once (by following the redirect
//! issued by the global entry host), then exposes the management API surface
//! as thin per-endpoint methods -- collectors, sources, collector upgrades,
//! the content library, folders, lookup tables, monitors, access keys, and
//! apps.
//!
//! The client is deliberately a transport layer, not an orchestrator:
//!
//! - Request payloads are checked against declarative [`schema`]s before any
//!   network I/O; a [`Error::Validation`] failure never reaches the wire.
//! - Every call returns the raw [`ApiResponse`] (status, headers, body).
//!   Non-2xx statuses are *not* turned into errors -- inspect
//!   [`ApiResponse::status`] yourself, or opt in with
//!   [`ApiResponse::error_for_status`].
//! - Asynchronous server-side jobs (content export/import/copy/delete, app
//!   install, collector upgrades) are exposed as start/status/result calls;
//!   polling cadence is the caller's business.
//! - No retries, no caching, no auto-pagination.
//!
//! ```no_run
//! use sumoly_api::{Client, Credentials, TransportConfig};
//!
//! # async fn demo() -> Result<(), sumoly_api::Error> {
//! let credentials = Credentials::new("suXXXXXXXXXXXX", "secret-key");
//! let client = Client::connect(credentials, &TransportConfig::default()).await?;
//!
//! let resp = client.list_collectors(None).await?;
//! println!("{}", resp.text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod response;
pub mod schema;
pub mod transport;

mod access_keys;
mod apps;
mod collectors;
mod content;
mod folders;
mod lookup_tables;
mod monitors;
mod sources;
mod upgrades;

pub use client::{Client, Params};
pub use credentials::Credentials;
pub use error::Error;
pub use response::ApiResponse;
pub use transport::TransportConfig;
