//
//  scribe-cms
//  api/documents.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Document operations.
//!
//! Documents are structured content records belonging to a collection, with a
//! lifecycle state (e.g. `draft`, `published`) and a language tag. Their shape
//! is defined by the collection's server-side schema, so document payloads and
//! responses are opaque [`Value`]s.
//!
//! Two read surfaces exist:
//!
//! - The *public* endpoints under `/api/v1/documents/collection/...` serve
//!   published content without authentication.
//! - The authenticated endpoints under `/api/v1/documents/...` expose the full
//!   lifecycle, including drafts and mutation.
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_cms::{ClientConfig, ScribeClient};
//! use scribe_cms::api::documents::CreateDocumentRequest;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), scribe_cms::ApiError> {
//! let client = ScribeClient::new(ClientConfig::default())?.with_token("token");
//!
//! let doc = client
//!     .create_document(
//!         "collection-uuid",
//!         CreateDocumentRequest {
//!             payload: json!({"title": "Hello"}),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use super::client::ScribeClient;
use super::common::ApiError;

/// Default page size for document listings.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default page offset for document listings.
pub const DEFAULT_OFFSET: u32 = 0;

/// Lifecycle state served by the public listing when none is requested.
pub const DEFAULT_PUBLIC_STATE: &str = "published";

/// Language tag applied to new documents when none is given.
pub const DEFAULT_LANG: &str = "en";

/// Lifecycle state applied to new documents when none is given.
pub const DEFAULT_CREATE_STATE: &str = "draft";

/// Query parameters for [`ScribeClient::get_public_documents`].
///
/// All fields are optional; unset fields fall back to `limit=10`, `offset=0`,
/// `state=published`.
#[derive(Debug, Clone, Default)]
pub struct PublicDocumentsQuery {
    /// Maximum number of documents to return.
    pub limit: Option<u32>,

    /// Number of documents to skip.
    pub offset: Option<u32>,

    /// Lifecycle state to filter by (e.g. `published`).
    ///
    /// State names are not validated client-side.
    pub state: Option<String>,
}

impl PublicDocumentsQuery {
    /// Formats the query string with defaults resolved.
    fn to_query_string(&self) -> String {
        format!(
            "?limit={}&offset={}&state={}",
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.offset.unwrap_or(DEFAULT_OFFSET),
            self.state.as_deref().unwrap_or(DEFAULT_PUBLIC_STATE),
        )
    }
}

/// Query parameters for [`ScribeClient::get_documents`].
///
/// Unset fields fall back to `limit=10`, `offset=0`.
#[derive(Debug, Clone, Default)]
pub struct DocumentsQuery {
    /// Maximum number of documents to return.
    pub limit: Option<u32>,

    /// Number of documents to skip.
    pub offset: Option<u32>,
}

impl DocumentsQuery {
    fn to_query_string(&self) -> String {
        format!(
            "?limit={}&offset={}",
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.offset.unwrap_or(DEFAULT_OFFSET),
        )
    }
}

/// Request payload for [`ScribeClient::create_document`].
///
/// Only `payload` carries content; `lang` and `state` default to `"en"` and
/// `"draft"` when unset and are always present in the serialized body.
#[derive(Debug, Clone, Default)]
pub struct CreateDocumentRequest {
    /// Document content, shaped by the collection's schema.
    pub payload: Value,

    /// Language tag for the new document. Defaults to `"en"`.
    pub lang: Option<String>,

    /// Initial lifecycle state. Defaults to `"draft"`.
    pub state: Option<String>,
}

/// Wire body for document creation, with defaults resolved.
#[derive(Serialize)]
struct CreateDocumentBody<'a> {
    payload: &'a Value,
    lang: &'a str,
    state: &'a str,
}

/// Request payload for [`ScribeClient::update_document`].
///
/// `state` is omitted from the serialized body entirely when unset, leaving
/// the document's current state untouched server-side.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDocumentRequest {
    /// Replacement document content.
    pub payload: Value,

    /// New lifecycle state, if it should change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ScribeClient {
    /// Lists documents in a collection through the public, unauthenticated
    /// endpoint.
    ///
    /// Issues `GET /api/v1/documents/collection/{collection_uuid}` with
    /// `limit`, `offset`, and `state` always present in the query string
    /// (defaults `10`, `0`, `published`).
    pub async fn get_public_documents(
        &self,
        collection_uuid: &str,
        query: PublicDocumentsQuery,
    ) -> Result<Value, ApiError> {
        let path = format!(
            "/api/v1/documents/collection/{}{}",
            collection_uuid,
            query.to_query_string()
        );
        self.get(&path).await
    }

    /// Fetches a single document through the public, unauthenticated endpoint.
    ///
    /// Issues `GET /api/v1/documents/collection/{collection_uuid}/{document_uuid}`.
    pub async fn get_public_document(
        &self,
        collection_uuid: &str,
        document_uuid: &str,
    ) -> Result<Value, ApiError> {
        let path = format!(
            "/api/v1/documents/collection/{}/{}",
            collection_uuid, document_uuid
        );
        self.get(&path).await
    }

    /// Lists documents in a collection, drafts included.
    ///
    /// Issues `GET /api/v1/documents/{collection_uuid}` with `limit` and
    /// `offset` always present in the query string (defaults `10`, `0`).
    pub async fn get_documents(
        &self,
        collection_uuid: &str,
        query: DocumentsQuery,
    ) -> Result<Value, ApiError> {
        let path = format!(
            "/api/v1/documents/{}{}",
            collection_uuid,
            query.to_query_string()
        );
        self.get(&path).await
    }

    /// Fetches a single document.
    ///
    /// Issues `GET /api/v1/documents/{collection_uuid}/{document_uuid}`.
    pub async fn get_document(
        &self,
        collection_uuid: &str,
        document_uuid: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/documents/{}/{}", collection_uuid, document_uuid);
        self.get(&path).await
    }

    /// Creates a document in a collection.
    ///
    /// Issues `POST /api/v1/documents/{collection_uuid}` with body
    /// `{payload, lang, state}`, filling in `lang="en"` and `state="draft"`
    /// when unset.
    pub async fn create_document(
        &self,
        collection_uuid: &str,
        request: CreateDocumentRequest,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/documents/{}", collection_uuid);
        let body = CreateDocumentBody {
            payload: &request.payload,
            lang: request.lang.as_deref().unwrap_or(DEFAULT_LANG),
            state: request.state.as_deref().unwrap_or(DEFAULT_CREATE_STATE),
        };
        self.post(&path, &body).await
    }

    /// Updates a document's payload, and optionally its state.
    ///
    /// Issues `PUT /api/v1/documents/{collection_uuid}/{document_uuid}`. When
    /// [`UpdateDocumentRequest::state`] is unset the `state` key is absent
    /// from the body rather than sent as null.
    pub async fn update_document(
        &self,
        collection_uuid: &str,
        document_uuid: &str,
        request: UpdateDocumentRequest,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/documents/{}/{}", collection_uuid, document_uuid);
        self.put(&path, &request).await
    }

    /// Deletes a document.
    ///
    /// Issues `DELETE /api/v1/documents/{collection_uuid}/{document_uuid}`.
    pub async fn delete_document(
        &self,
        collection_uuid: &str,
        document_uuid: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/documents/{}/{}", collection_uuid, document_uuid);
        self.delete(&path).await
    }
}
