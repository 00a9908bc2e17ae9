//
//  scribe-cms
//  tests/api.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! Request/response contract tests against a mock HTTP server.
//!
//! Every test spins up a fresh mockito server, points a client at it, and
//! asserts on the exact request shape the client puts on the wire.

use mockito::{Matcher, Server, ServerGuard};
use scribe_cms::api::documents::{
    CreateDocumentRequest, DocumentsQuery, PublicDocumentsQuery, UpdateDocumentRequest,
};
use scribe_cms::api::webhooks::CreateWebhookRequest;
use scribe_cms::{ClientConfig, ScribeClient};
use serde_json::json;

fn client_for(server: &ServerGuard, token: Option<&str>) -> ScribeClient {
    ScribeClient::new(ClientConfig {
        api_token: token.map(str::to_string),
        base_url: Some(server.url()),
    })
    .expect("failed to build client")
}

#[tokio::test]
async fn public_documents_use_default_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/documents/collection/c?limit=10&offset=0&state=published")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"documents": []}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let result = client
        .get_public_documents("c", PublicDocumentsQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"documents": []}));
}

#[tokio::test]
async fn public_documents_honour_explicit_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/documents/collection/c?limit=5&offset=20&state=draft")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server, None);
    client
        .get_public_documents(
            "c",
            PublicDocumentsQuery {
                limit: Some(5),
                offset: Some(20),
                state: Some("draft".to_string()),
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn requests_carry_bearer_token_when_configured() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/documents/c?limit=10&offset=0")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server, Some("secret-token"));
    client
        .get_documents("c", DocumentsQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn requests_omit_authorization_header_without_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/documents/collection/c/d")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, None);
    client.get_public_document("c", "d").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_request_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/collections/missing")
        .with_status(404)
        .with_body(r#"{"detail": "never read"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let err = client.get_collection("missing").await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed: 404 Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_error_status_is_reported_verbatim() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/v1/webhooks/w")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let err = client.delete_webhook("w").await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed: 503 Service Unavailable");
}

#[tokio::test]
async fn create_document_fills_lang_and_state_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/documents/c")
        .match_header("authorization", "Bearer t")
        .match_body(Matcher::Json(json!({
            "payload": {"title": "t"},
            "lang": "en",
            "state": "draft",
        })))
        .with_status(201)
        .with_body(r#"{"uuid": "new-doc"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let created = client
        .create_document(
            "c",
            CreateDocumentRequest {
                payload: json!({"title": "t"}),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created, json!({"uuid": "new-doc"}));
}

#[tokio::test]
async fn update_document_omits_unset_state_from_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v1/documents/c/d")
        .match_body(Matcher::Json(json!({"payload": {"title": "t2"}})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    client
        .update_document(
            "c",
            "d",
            UpdateDocumentRequest {
                payload: json!({"title": "t2"}),
                state: None,
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_collection_targets_expected_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/collections/x")
        .with_status(200)
        .with_body(r#"{"uuid": "x"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let collection = client.get_collection("x").await.unwrap();

    mock.assert_async().await;
    assert_eq!(collection, json!({"uuid": "x"}));
}

#[tokio::test]
async fn download_media_returns_raw_bytes_with_token_attached() {
    let payload: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF];

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/media/m/download")
        .match_header("authorization", "Bearer t")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(payload)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let bytes = client.download_media("m").await.unwrap();

    mock.assert_async().await;
    assert_eq!(bytes.as_ref(), payload);
}

#[tokio::test]
async fn upload_media_sends_multipart_form_with_file_part() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/media/upload")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::Regex(
            r#"name="file"; filename="logo.png""#.to_string(),
        ))
        .with_status(201)
        .with_body(r#"{"uuid": "media-1"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let uploaded = client
        .upload_media("logo.png", b"fake image bytes".to_vec())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(uploaded, json!({"uuid": "media-1"}));
}

#[tokio::test]
async fn create_webhook_sends_full_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/webhooks")
        .match_body(Matcher::Json(json!({
            "name": "hook",
            "url": "https://example.com/cb",
            "events": ["document.published", "document.deleted"],
            "method": "POST",
        })))
        .with_status(201)
        .with_body(r#"{"uuid": "hook-1"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    client
        .create_webhook(CreateWebhookRequest {
            name: "hook".to_string(),
            url: "https://example.com/cb".to_string(),
            events: vec![
                "document.published".to_string(),
                "document.deleted".to_string(),
            ],
            method: "POST".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_reads_issue_independent_requests() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/collections")
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    client.get_collections().await.unwrap();
    client.get_collections().await.unwrap();

    mock.assert_async().await;
}
