//
//  scribe-cms
//  lib.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! # Scribe CMS Client Library
//!
//! A thin async client for the Scribe headless CMS REST API, covering documents,
//! collections, media files, and webhooks.
//!
//! ## Overview
//!
//! The client is deliberately minimal: every public method shapes a small set of
//! parameters into a single HTTP request, attaches the configured bearer token,
//! and returns the server's JSON response untouched. Document and collection
//! schemas are defined server-side, so responses are surfaced as
//! [`serde_json::Value`] rather than fixed structs.
//!
//! There is no retry, caching, pagination iteration, or token refresh: each call
//! maps to exactly one request, and failures surface as [`api::ApiError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use scribe_cms::{ClientConfig, ScribeClient};
//!
//! # async fn example() -> Result<(), scribe_cms::ApiError> {
//! let client = ScribeClient::new(ClientConfig {
//!     api_token: Some("your-token".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let collections = client.get_collections().await?;
//! println!("{collections:#}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, error types, and one module per API resource group

/// API client implementation.
///
/// This module provides the HTTP client for the Scribe REST API:
/// - [`api::client`]: Core client with authentication and request dispatch
/// - [`api::documents`]: Document operations (public and authenticated)
/// - [`api::collections`]: Collection and schema operations
/// - [`api::media`]: Media upload, metadata, and binary download
/// - [`api::webhooks`]: Webhook registration and management
pub mod api;

/// Re-export of the main API client and its configuration.
pub use api::client::{ClientConfig, ScribeClient};

/// Re-export of the API error type.
pub use api::ApiError;

/// Client version, derived from Cargo.toml at compile time.
///
/// Sent to the server as part of the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
