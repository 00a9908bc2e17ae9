//
//  scribe-cms
//  api/collections.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Collection, schema, and field-type operations.
//!
//! A collection is a named schema grouping of documents, defined by a set of
//! typed fields. Field definitions are server-owned (the catalogue of valid
//! field types lives behind [`ScribeClient::get_field_types`]), so field
//! entries are passed through as opaque [`Value`]s without client-side
//! validation.

use serde::Serialize;
use serde_json::Value;

use super::client::ScribeClient;
use super::common::ApiError;

/// Request payload for [`ScribeClient::create_collection`].
///
/// # Example
///
/// ```rust
/// use scribe_cms::api::collections::CreateCollectionRequest;
/// use serde_json::json;
///
/// let request = CreateCollectionRequest {
///     name: "posts".to_string(),
///     display_name: "Blog Posts".to_string(),
///     description: Some("All blog content".to_string()),
///     is_public: Some(true),
///     fields: vec![json!({"name": "title", "type": "text"})],
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionRequest {
    /// Machine name of the collection.
    pub name: String,

    /// Human-readable name.
    pub display_name: String,

    /// Optional description of the collection's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether documents are served through the public endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Field definitions, as the server's field-type schema expects them.
    pub fields: Vec<Value>,
}

/// Request payload for [`ScribeClient::update_collection`].
///
/// Everything is optional; unset fields are absent from the serialized body
/// and left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollectionRequest {
    /// New machine name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New public visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Replacement field definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Value>>,
}

impl ScribeClient {
    /// Lists all collections.
    ///
    /// Issues `GET /api/v1/collections`.
    pub async fn get_collections(&self) -> Result<Value, ApiError> {
        self.get("/api/v1/collections").await
    }

    /// Fetches a single collection.
    ///
    /// Issues `GET /api/v1/collections/{uuid}`.
    pub async fn get_collection(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/collections/{}", uuid);
        self.get(&path).await
    }

    /// Creates a collection.
    ///
    /// Issues `POST /api/v1/collections`.
    pub async fn create_collection(
        &self,
        request: CreateCollectionRequest,
    ) -> Result<Value, ApiError> {
        self.post("/api/v1/collections", &request).await
    }

    /// Updates a collection. Unset fields are left unchanged.
    ///
    /// Issues `PUT /api/v1/collections/{uuid}`.
    pub async fn update_collection(
        &self,
        uuid: &str,
        request: UpdateCollectionRequest,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/collections/{}", uuid);
        self.put(&path, &request).await
    }

    /// Deletes a collection.
    ///
    /// Issues `DELETE /api/v1/collections/{uuid}`.
    pub async fn delete_collection(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/collections/{}", uuid);
        self.delete(&path).await
    }

    /// Fetches the JSON schema describing a collection's documents.
    ///
    /// Issues `GET /api/v1/collections/{uuid}/schema`.
    pub async fn get_collection_schema(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/collections/{}/schema", uuid);
        self.get(&path).await
    }

    /// Fetches a collection's field definitions.
    ///
    /// Issues `GET /api/v1/collections/{uuid}/fields`.
    pub async fn get_collection_fields(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/collections/{}/fields", uuid);
        self.get(&path).await
    }

    /// Fetches the catalogue of field types collections can be built from.
    ///
    /// Issues `GET /api/v1/collections/field-types`.
    pub async fn get_field_types(&self) -> Result<Value, ApiError> {
        self.get("/api/v1/collections/field-types").await
    }
}
