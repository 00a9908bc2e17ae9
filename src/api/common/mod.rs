//
//  scribe-cms
//  api/common/mod.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Common types shared across the API resource groups.
//!
//! The only member of note is [`ApiError`], the error type every client
//! operation returns.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all Scribe API operations.
///
/// There are deliberately only two shapes of failure:
///
/// - [`ApiError::Request`]: the server completed the request with a
///   non-success status. Only the status line is captured; the response body is
///   not read, so server-side error detail is not surfaced.
/// - [`ApiError::Transport`]: the request could not complete (DNS, connection
///   refused, aborted), or a success response body failed to decode as JSON.
///   These pass through from [`reqwest`] untranslated.
///
/// # Example
///
/// ```rust
/// use scribe_cms::ApiError;
///
/// let err = ApiError::from_status(reqwest::StatusCode::NOT_FOUND);
/// assert_eq!(err.to_string(), "Request failed: 404 Not Found");
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success (non-2xx) status.
    #[error("Request failed: {status} {status_text}")]
    Request {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status code.
        status_text: String,
    },

    /// A transport-level or JSON-decode failure from the underlying HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Builds a [`ApiError::Request`] from an HTTP status code.
    pub fn from_status(status: StatusCode) -> Self {
        Self::Request {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Returns the HTTP status code if this is a request failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}
