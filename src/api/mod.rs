//
//  scribe-cms
//  api/mod.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Scribe headless CMS REST API (v1, under `/api/v1`).
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request dispatch
//! - [`common`]: Shared types, most notably [`ApiError`]
//! - [`documents`], [`collections`], [`media`], [`webhooks`]: one module per
//!   resource group, each adding its operations to [`ScribeClient`] via an
//!   `impl` block and defining the request/query structs those operations take
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scribe_cms::{ClientConfig, ScribeClient};
//!
//! let client = ScribeClient::new(ClientConfig::default())
//!     .expect("failed to create client")
//!     .with_token("your-token");
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, ApiError>`. A completed request with a
//! non-success status maps to [`ApiError::Request`]; transport and decode
//! failures pass through as [`ApiError::Transport`].

/// Core HTTP client for the Scribe API.
///
/// Provides [`ScribeClient`], which handles:
/// - Base URL and bearer token configuration
/// - Authentication header injection
/// - Request dispatch and status code checking
pub mod client;

/// Common types shared across resource groups.
pub mod common;

/// Document operations, including the unauthenticated public read surface.
pub mod documents;

/// Collection, schema, and field-type operations.
pub mod collections;

/// Media file operations, including multipart upload and binary download.
pub mod media;

/// Webhook registration and management operations.
pub mod webhooks;

/// Re-export of the main Scribe API client.
pub use client::ScribeClient;

/// Re-export of the API error type.
pub use common::ApiError;
