//! Integration tests for file upload and download orchestration.
//!
//! Each transfer is a ticket mutation against the GraphQL endpoint
//! followed by a PUT or GET against the pre-signed URI; both ends are
//! mocked here.

use std::path::{Path, PathBuf};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bln_api::{Client, ConcurrencyPolicy, TransferError};

/// Creates a client pointed at the mock server's GraphQL endpoint.
fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .token_str("test-token")
        .unwrap()
        .endpoint(format!("{}/graphql", server.uri()))
        .build()
        .unwrap()
}

/// Creates a fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bln-api-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Mounts a GraphQL mock answering a ticket mutation with the given URI.
async fn mount_ticket_mock(server: &MockServer, mutation: &str, uri: &str, file_name: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains(mutation))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                mutation: {
                    "ok": {"name": file_name, "uri": uri, "uriType": "signed"},
                    "err": null
                }
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_upload_runs_ticket_then_put() {
    let server = MockServer::start().await;
    let dir = scratch_dir("upload-ok");
    let local = dir.join("data.csv");
    std::fs::write(&local, b"city,count\nsf,1\n").unwrap();

    let put_uri = format!("{}/storage/data.csv", server.uri());
    mount_ticket_mock(&server, "createFileUploadUri", &put_uri, "data.csv").await;
    Mock::given(method("PUT"))
        .and(path("/storage/data.csv"))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.upload_file("UHJvamVjdDox", &local).await.unwrap();
}

#[tokio::test]
async fn test_missing_file_is_reported_without_a_ticket_call() {
    let server = MockServer::start().await;
    // no mocks mounted: any request would 404 and fail the test below
    let client = test_client(&server);

    let error = client
        .upload_file("UHJvamVjdDox", Path::new("/definitely/not/here.csv"))
        .await
        .unwrap_err();

    assert!(matches!(error, TransferError::FileNotFound { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_completes_around_a_missing_file() {
    let server = MockServer::start().await;
    let dir = scratch_dir("batch");
    let first = dir.join("a.csv");
    let third = dir.join("c.csv");
    std::fs::write(&first, b"a").unwrap();
    std::fs::write(&third, b"c").unwrap();
    let missing = dir.join("b.csv");

    let put_uri = format!("{}/storage/any", server.uri());
    mount_ticket_mock(&server, "createFileUploadUri", &put_uri, "any").await;
    Mock::given(method("PUT"))
        .and(path("/storage/any"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let paths = vec![first.clone(), missing.clone(), third.clone()];
    let outcomes = client.upload_files("UHJvamVjdDox", &paths).await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].path, first);
    assert!(outcomes[0].result.is_ok());
    assert!(matches!(
        outcomes[1].result,
        Err(TransferError::FileNotFound { .. })
    ));
    assert!(outcomes[2].result.is_ok());
}

#[tokio::test]
async fn test_serial_policy_uploads_in_input_order() {
    let server = MockServer::start().await;
    let dir = scratch_dir("serial");
    let paths: Vec<PathBuf> = (0..3)
        .map(|i| {
            let path = dir.join(format!("f{i}.csv"));
            std::fs::write(&path, b"x").unwrap();
            path
        })
        .collect();

    let put_uri = format!("{}/storage/any", server.uri());
    mount_ticket_mock(&server, "createFileUploadUri", &put_uri, "any").await;
    Mock::given(method("PUT"))
        .and(path("/storage/any"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    let client = Client::builder()
        .token_str("test-token")
        .unwrap()
        .endpoint(format!("{}/graphql", server.uri()))
        .concurrency(ConcurrencyPolicy::Serial)
        .build()
        .unwrap();

    let outcomes = client.upload_files("UHJvamVjdDox", &paths).await;
    let returned: Vec<_> = outcomes.iter().map(|o| o.path.clone()).collect();
    assert_eq!(returned, paths);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}

#[tokio::test]
async fn test_rejected_put_reports_storage_error() {
    let server = MockServer::start().await;
    let dir = scratch_dir("put-403");
    let local = dir.join("data.csv");
    std::fs::write(&local, b"x").unwrap();

    let put_uri = format!("{}/storage/data.csv", server.uri());
    mount_ticket_mock(&server, "createFileUploadUri", &put_uri, "data.csv").await;
    Mock::given(method("PUT"))
        .and(path("/storage/data.csv"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.upload_file("UHJvamVjdDox", &local).await.unwrap_err();

    assert!(matches!(
        error,
        TransferError::Storage { code: 403, ref reason } if reason == "Forbidden"
    ));
}

#[tokio::test]
async fn test_ticket_mutation_err_fails_the_upload() {
    let server = MockServer::start().await;
    let dir = scratch_dir("ticket-err");
    let local = dir.join("data.csv");
    std::fs::write(&local, b"x").unwrap();

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createFileUploadUri": {"ok": null, "err": "no such project"}}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.upload_file("bogus", &local).await.unwrap_err();

    assert_eq!(error.to_string(), "no such project");
}

#[tokio::test]
async fn test_download_writes_the_streamed_body() {
    let server = MockServer::start().await;
    let dir = scratch_dir("download-ok");

    let get_uri = format!("{}/storage/data.csv", server.uri());
    mount_ticket_mock(&server, "createFileDownloadUri", &get_uri, "data.csv").await;
    Mock::given(method("GET"))
        .and(path("/storage/data.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"city,count\nsf,1\n".to_vec()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let saved = client
        .download_file("UHJvamVjdDox", "data.csv", Some(&dir))
        .await
        .unwrap();

    assert_eq!(saved, dir.join("data.csv"));
    assert_eq!(std::fs::read(&saved).unwrap(), b"city,count\nsf,1\n");
}

#[tokio::test]
async fn test_rejected_download_leaves_no_file_behind() {
    let server = MockServer::start().await;
    let dir = scratch_dir("download-404");

    let get_uri = format!("{}/storage/gone.csv", server.uri());
    mount_ticket_mock(&server, "createFileDownloadUri", &get_uri, "gone.csv").await;
    Mock::given(method("GET"))
        .and(path("/storage/gone.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client
        .download_file("UHJvamVjdDox", "gone.csv", Some(&dir))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        TransferError::Storage { code: 404, ref reason } if reason == "Not Found"
    ));
    assert!(!dir.join("gone.csv").exists());
}
