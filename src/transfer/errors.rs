//! Error types for file transfers.

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::ApiError;

/// Errors that can occur while moving file content to or from storage.
///
/// In a batch upload these are per-file: one failing file never aborts its
/// siblings.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The local path does not exist or has no usable file name.
    #[error("invalid path: {path}")]
    FileNotFound {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The storage endpoint answered a PUT or GET with a non-2xx status.
    #[error("{reason}")]
    Storage {
        /// The HTTP status code of the response.
        code: u16,
        /// The canonical reason phrase for the status code.
        reason: String,
    },

    /// The pre-signed URI could not be parsed.
    #[error("Invalid transfer URI: {uri}")]
    InvalidUri {
        /// The unparseable URI.
        uri: String,
    },

    /// The ticket mutation payload did not match the expected shape.
    #[error("Malformed transfer ticket: {0}")]
    Ticket(#[from] serde_json::Error),

    /// The ticket-acquisition round trip failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reading the local file or writing the download failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
