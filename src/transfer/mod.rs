//! File transfer orchestration.
//!
//! Every transfer is a two-step sequence: a ticket-acquisition mutation
//! against the GraphQL API resolves a short-lived pre-signed URI, then the
//! file bytes move over plain HTTP PUT (upload) or GET (download) against
//! that URI. Tickets are issued per transfer and never reused.
//!
//! Batch uploads fan out over Tokio tasks bounded by the client's
//! [`ConcurrencyPolicy`]; each file runs its full ticket+PUT sequence
//! independently and a failure is reported for that file alone.

mod errors;

pub use errors::TransferError;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::clients::GraphqlClient;
use crate::config::ConcurrencyPolicy;
use crate::graphql::{self, input_variables, normalize, unwrap_payload};

/// A short-lived authorization for exactly one file transfer.
///
/// Obtained from the `createFileUploadUri` / `createFileDownloadUri`
/// mutations and discarded after the transfer it was issued for.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// The file name the ticket was issued for.
    pub name: String,
    /// The pre-signed URI authorizing the transfer.
    pub uri: String,
    /// Storage-provider tag describing the URI kind.
    pub uri_type: String,
}

/// The result of one file within a batch upload.
#[derive(Debug)]
pub struct UploadOutcome {
    /// The local path this outcome belongs to.
    pub path: PathBuf,
    /// Success, or the per-file error.
    pub result: Result<(), TransferError>,
}

/// HTTP client for pre-signed storage URIs.
///
/// Separate from the GraphQL transport: storage requests carry no
/// `Authorization` header, only the octet-stream content type and the
/// provider host header the signed URI requires.
#[derive(Clone, Debug)]
pub struct StorageClient {
    client: reqwest::Client,
}

impl StorageClient {
    /// Creates a storage client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which
    /// only happens on TLS initialization failure.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Streams `bytes` to a pre-signed upload URI.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Storage`] for a non-2xx response,
    /// [`TransferError::InvalidUri`] if the URI has no host, or a wrapped
    /// network error.
    pub async fn put(&self, uri: &str, bytes: Vec<u8>) -> Result<(), TransferError> {
        let host = uri_host(uri)?;
        let res = self
            .client
            .put(uri)
            .header("content-type", "application/octet-stream")
            .header("host", host)
            .body(bytes)
            .send()
            .await
            .map_err(crate::clients::ApiError::from)?;

        let status = res.status();
        if !status.is_success() {
            return Err(storage_error(status));
        }
        Ok(())
    }

    /// Downloads a pre-signed URI to `dest` with chunked reads.
    ///
    /// The destination file is only created once the response status is
    /// known good, so a rejected GET leaves nothing behind. A connection
    /// dropping mid-stream can still leave a partial file; that is
    /// accepted behavior, not a guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Storage`] for a non-2xx response, or a
    /// wrapped network/IO error.
    pub async fn get_to_file(&self, uri: &str, dest: &Path) -> Result<(), TransferError> {
        let mut res = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(crate::clients::ApiError::from)?;

        let status = res.status();
        if !status.is_success() {
            return Err(storage_error(status));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        while let Some(chunk) = res.chunk().await.map_err(crate::clients::ApiError::from)? {
            if !chunk.is_empty() {
                file.write_all(&chunk).await?;
            }
        }
        file.flush().await?;
        Ok(())
    }
}

impl Default for StorageClient {
    fn default() -> Self {
        Self::new()
    }
}

fn uri_host(uri: &str) -> Result<String, TransferError> {
    reqwest::Url::parse(uri)
        .ok()
        .and_then(|url| url.host_str().map(ToString::to_string))
        .ok_or_else(|| TransferError::InvalidUri {
            uri: uri.to_string(),
        })
}

fn storage_error(status: reqwest::StatusCode) -> TransferError {
    TransferError::Storage {
        code: status.as_u16(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string(),
    }
}

/// Runs the ticket mutation round trip and decodes the payload.
async fn request_ticket(
    gql: &GraphqlClient,
    document: &str,
    project_id: &str,
    file_name: &str,
) -> Result<Ticket, TransferError> {
    let variables = input_variables(json!({
        "projectId": project_id,
        "fileName": file_name,
    }));
    let raw = gql.execute(document, variables).await?;
    let payload = unwrap_payload(normalize(raw))?;
    Ok(serde_json::from_value(payload)?)
}

/// Uploads one local file: existence check, upload ticket, then PUT.
pub(crate) async fn upload_file(
    gql: &GraphqlClient,
    storage: &StorageClient,
    project_id: &str,
    path: &Path,
) -> Result<(), TransferError> {
    tracing::debug!(path = %path.display(), "uploading file");

    let missing = || TransferError::FileNotFound {
        path: path.to_path_buf(),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(missing)?
        .to_string();
    if tokio::fs::metadata(path).await.is_err() {
        return Err(missing());
    }

    let ticket = request_ticket(
        gql,
        &graphql::queries::create_file_upload_uri(),
        project_id,
        &file_name,
    )
    .await?;

    let bytes = tokio::fs::read(path).await?;
    storage.put(&ticket.uri, bytes).await
}

/// Uploads a batch of files, fanning out per the concurrency policy.
///
/// Outcomes come back in input order. No ordering or atomicity guarantee
/// exists between files in the bounded case: a partial batch failure can
/// leave some files uploaded and others not.
pub(crate) async fn upload_files(
    gql: &GraphqlClient,
    storage: &StorageClient,
    policy: ConcurrencyPolicy,
    project_id: &str,
    paths: &[PathBuf],
) -> Vec<UploadOutcome> {
    if policy == ConcurrencyPolicy::Serial {
        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let result = upload_file(gql, storage, project_id, path).await;
            if let Err(error) = &result {
                tracing::warn!(path = %path.display(), %error, "upload failed");
            }
            outcomes.push(UploadOutcome {
                path: path.clone(),
                result,
            });
        }
        return outcomes;
    }

    let semaphore = Arc::new(Semaphore::new(policy.limit()));
    let mut set = JoinSet::new();
    for (index, path) in paths.iter().enumerate() {
        let gql = gql.clone();
        let storage = storage.clone();
        let semaphore = Arc::clone(&semaphore);
        let project_id = project_id.to_string();
        let path = path.clone();
        set.spawn(async move {
            // the semaphore is never closed while tasks run
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("upload semaphore closed");
            let result = upload_file(&gql, &storage, &project_id, &path).await;
            if let Err(error) = &result {
                tracing::warn!(path = %path.display(), %error, "upload failed");
            }
            (index, UploadOutcome { path, result })
        });
    }

    let mut indexed = Vec::with_capacity(paths.len());
    while let Some(joined) = set.join_next().await {
        if let Ok(entry) = joined {
            indexed.push(entry);
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, outcome)| outcome).collect()
}

/// Downloads one remote file into `output_dir` (current directory when
/// unset) and returns the written path.
pub(crate) async fn download_file(
    gql: &GraphqlClient,
    storage: &StorageClient,
    project_id: &str,
    file_name: &str,
    output_dir: Option<&Path>,
) -> Result<PathBuf, TransferError> {
    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let ticket = request_ticket(
        gql,
        &graphql::queries::create_file_download_uri(),
        project_id,
        file_name,
    )
    .await?;

    let output_path = output_dir.join(file_name);
    tracing::debug!(path = %output_path.display(), "downloading file");
    storage.get_to_file(&ticket.uri, &output_path).await?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserializes_from_mutation_payload() {
        let payload = json!({
            "name": "data.csv",
            "uri": "https://storage.googleapis.com/bucket/data.csv?sig=abc",
            "uriType": "PUT"
        });
        let ticket: Ticket = serde_json::from_value(payload).unwrap();
        assert_eq!(ticket.name, "data.csv");
        assert_eq!(ticket.uri_type, "PUT");
    }

    #[test]
    fn test_uri_host_extracts_storage_host() {
        let host = uri_host("https://storage.googleapis.com/bucket/f.csv?sig=x").unwrap();
        assert_eq!(host, "storage.googleapis.com");
    }

    #[test]
    fn test_uri_host_rejects_garbage() {
        let err = uri_host("not a uri").unwrap_err();
        assert!(matches!(err, TransferError::InvalidUri { .. }));
    }

    #[test]
    fn test_storage_error_maps_reason_phrase() {
        let err = storage_error(reqwest::StatusCode::FORBIDDEN);
        assert!(matches!(
            err,
            TransferError::Storage { code: 403, ref reason } if reason == "Forbidden"
        ));
    }
}
