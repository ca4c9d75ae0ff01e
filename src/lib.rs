//! Asana MCP Gateway Library
//!
//! This crate exposes the Asana API as MCP (Model Context Protocol) tools
//! behind a stateless, multi-tenant HTTP server. Credentials arrive per
//! request in the `X-Asana-Access-Token` header; each request gets its own
//! client and tool registry, and nothing is shared between tenants.
//!
//! # Features
//!
//! - **Per-request tool registry**: a factory takes one tenant's credentials
//!   and returns the fully wired tool set
//! - **Uniform error classification**: auth, rate-limit (with retry hint),
//!   not-found, and generic API errors
//! - **Normalized pagination**: list tools return one page plus an opaque
//!   `next_offset` token
//! - **Dual-mode output**: pretty JSON or Markdown, chosen per call
//!
//! # Example
//!
//! ```rust,no_run
//! use asana_gateway::{AsanaClient, AsanaServer, GatewayConfig};
//!
//! # async fn example() -> Result<(), asana_gateway::Error> {
//! // Create a client directly for low-level API access
//! let client = AsanaClient::new("a-tenant-token")?;
//!
//! // Or build the request-scoped MCP server for tool-based access
//! let server = AsanaServer::new("a-tenant-token", &GatewayConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod server;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use client::AsanaClient;
pub use config::GatewayConfig;
pub use error::Error;
pub use format::ResponseFormat;
pub use server::AsanaServer;
pub use transport::StatefulSession;

// Re-export commonly used wire types
pub use types::{Page, Resource, ResourceCompact};
