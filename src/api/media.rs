//
//  scribe-cms
//  api/media.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Media file operations.
//!
//! Media files are binary assets (images, attachments) with a small amount of
//! server-side metadata such as alt text. Metadata endpoints speak JSON like
//! the rest of the API; the two exceptions are upload, which sends a multipart
//! form with a single part named `file`, and download, which returns the raw
//! bytes without JSON decoding.
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_cms::{ClientConfig, ScribeClient};
//!
//! # async fn example() -> Result<(), scribe_cms::ApiError> {
//! let client = ScribeClient::new(ClientConfig::default())?.with_token("token");
//!
//! let uploaded = client.upload_media("logo.png", std::fs::read("logo.png").unwrap()).await?;
//! let bytes = client.download_media("media-uuid").await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use super::client::ScribeClient;
use super::common::ApiError;

/// Request payload for [`ScribeClient::update_media`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMediaRequest {
    /// Alternative text describing the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ScribeClient {
    /// Lists all media files.
    ///
    /// Issues `GET /api/v1/media/ls`.
    pub async fn list_media(&self) -> Result<Value, ApiError> {
        self.get("/api/v1/media/ls").await
    }

    /// Uploads a media file.
    ///
    /// Issues `POST /api/v1/media/upload` as a multipart form with a single
    /// part named `file`. The whole payload is held in memory; there is no
    /// streaming upload.
    pub async fn upload_media(
        &self,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let part = Part::bytes(data).file_name(file_name.into());
        let form = Form::new().part("file", part);
        self.post_multipart("/api/v1/media/upload", form).await
    }

    /// Fetches a media file's metadata.
    ///
    /// Issues `GET /api/v1/media/{uuid}`.
    pub async fn get_media_file(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/media/{}", uuid);
        self.get(&path).await
    }

    /// Updates a media file's metadata.
    ///
    /// Issues `PUT /api/v1/media/{uuid}`; unset fields are absent from the
    /// body.
    pub async fn update_media(
        &self,
        uuid: &str,
        request: UpdateMediaRequest,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/media/{}", uuid);
        self.put(&path, &request).await
    }

    /// Deletes a media file.
    ///
    /// Issues `DELETE /api/v1/media/{uuid}`.
    pub async fn delete_media(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/media/{}", uuid);
        self.delete(&path).await
    }

    /// Downloads a media file's binary content.
    ///
    /// Issues `GET /api/v1/media/{uuid}/download` and returns the response
    /// body untouched. The bearer token is attached here the same as on every
    /// other endpoint.
    pub async fn download_media(&self, uuid: &str) -> Result<Bytes, ApiError> {
        let path = format!("/api/v1/media/{}/download", uuid);
        self.get_bytes(&path).await
    }
}
