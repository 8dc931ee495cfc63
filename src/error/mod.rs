//! Error types for the Presensi client.
//!
//! The API layer returns these errors; the controller logs them and turns
//! them into notices, so none of them ever reach the renderer directly.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the Presensi client.
///
/// Network, HTTP status and envelope failures are kept apart here for logging,
/// but the view collapses all of them into a single generic notice per
/// operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid base URL or limits).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The request never produced a response (network unreachable, CORS, aborted).
    #[error("Failed to send request: {0}")]
    RequestError(String),
    /// The backend answered with a non-success HTTP status.
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// The backend answered `success: false`.
    #[error("Request rejected by server: {0}")]
    Rejected(String),
    /// The browser refused or failed the download script.
    #[error("Failed to start download: {0}")]
    DownloadError(String),
    /// Workbook generation error.
    #[error(transparent)]
    ExportError(#[from] rust_xlsxwriter::XlsxError),
}
