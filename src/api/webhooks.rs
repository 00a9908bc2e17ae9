//
//  scribe-cms
//  api/webhooks.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Webhook registration and management operations.
//!
//! A webhook is a callback URL the server invokes on document lifecycle
//! events. Event names and delivery semantics are server-defined; the client
//! passes them along unvalidated.

use serde::Serialize;
use serde_json::Value;

use super::client::ScribeClient;
use super::common::ApiError;

/// Request payload for [`ScribeClient::create_webhook`].
///
/// # Example
///
/// ```rust
/// use scribe_cms::api::webhooks::CreateWebhookRequest;
///
/// let request = CreateWebhookRequest {
///     name: "deploy-hook".to_string(),
///     url: "https://ci.example.com/hooks/content".to_string(),
///     events: vec!["document.published".to_string()],
///     method: "POST".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookRequest {
    /// Display name for the webhook.
    pub name: String,

    /// Callback URL invoked on matching events.
    pub url: String,

    /// Event names that trigger the callback.
    pub events: Vec<String>,

    /// HTTP method the server uses for the callback.
    pub method: String,
}

/// Request payload for [`ScribeClient::update_webhook`].
///
/// Everything is optional; unset fields are absent from the serialized body
/// and left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebhookRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New callback URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Replacement event list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// New callback HTTP method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ScribeClient {
    /// Lists all registered webhooks.
    ///
    /// Issues `GET /api/v1/webhooks`.
    pub async fn list_webhooks(&self) -> Result<Value, ApiError> {
        self.get("/api/v1/webhooks").await
    }

    /// Registers a webhook.
    ///
    /// Issues `POST /api/v1/webhooks`.
    pub async fn create_webhook(
        &self,
        request: CreateWebhookRequest,
    ) -> Result<Value, ApiError> {
        self.post("/api/v1/webhooks", &request).await
    }

    /// Updates a webhook. Unset fields are left unchanged.
    ///
    /// Issues `PUT /api/v1/webhooks/{uuid}`.
    pub async fn update_webhook(
        &self,
        uuid: &str,
        request: UpdateWebhookRequest,
    ) -> Result<Value, ApiError> {
        let path = format!("/api/v1/webhooks/{}", uuid);
        self.put(&path, &request).await
    }

    /// Removes a webhook registration.
    ///
    /// Issues `DELETE /api/v1/webhooks/{uuid}`.
    pub async fn delete_webhook(&self, uuid: &str) -> Result<Value, ApiError> {
        let path = format!("/api/v1/webhooks/{}", uuid);
        self.delete(&path).await
    }
}
