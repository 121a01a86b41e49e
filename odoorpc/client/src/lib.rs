//! Async JSON-RPC client for Odoo-style business application servers.
//!
//! The client maps a small set of method calls (search, read, create,
//! update, delete, group-by aggregation) onto the remote `call_kw`
//! endpoint, translating each into a single HTTP POST carrying a fixed
//! JSON-RPC 2.0 envelope and normalizing the server's `result`/`error`
//! reply into a [`RpcResult`].
//!
//! Two authentication modes are supported by the one client type: a static
//! `X-Auth-Token` header, and a session cookie captured from a credentials
//! POST to `/web/session/authenticate`. The client never relies on an
//! ambient cookie jar; its auth mode attaches every credential header
//! explicitly.
//!
//! ```ignore
//! use odoorpc_client::{Client, Config};
//! use odoorpc_proto::prelude::*;
//!
//! let client = Client::new(
//!     Config::new("https://erp.example.com:8069").with_token("secret"),
//! )?;
//!
//! let params = QueryParams::new()
//!     .with_domain(Domain::new().filter("is_company", "=", true))
//!     .with_fields(vec!["id".into(), "name".into()])
//!     .with_limit(10);
//! let companies = client.search_read("res.partner", &params, None).await?;
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use auth::AuthMode;
pub use client::Client;
pub use config::Config;
pub use error::{ClientError, RpcResult};
pub use session::Session;
