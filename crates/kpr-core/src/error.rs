//! Error types for the kpr-core library.

use thiserror::Error;

/// Main error type for the kpr library.
#[derive(Error, Debug)]
pub enum KprError {
    /// Letterhead field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Tax-ID resolver error.
    #[error("resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Batch processing error.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to letterhead field extraction.
///
/// Extraction itself never fails on missing matches; the only failure mode
/// is a document the reader cannot supply text for.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document reader could not supply any paragraph text.
    #[error("failed to read document: {0}")]
    Read(String),
}

/// Errors related to the external tax-ID lookup.
///
/// These never cross the resolver boundary as hard failures; the resolver
/// logs them and reports the tax ID as unresolved.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The search request could not be sent or timed out.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The search service answered with a non-success status.
    #[error("search returned status {0}")]
    Status(u16),

    /// The result page contained no checksum-valid candidate.
    #[error("no valid tax ID in search results")]
    NoCandidate,
}

/// Errors related to batch aggregation.
///
/// Only batch-level preconditions are hard errors; per-document failures are
/// collected in the outcome and never abort the run.
#[derive(Error, Debug)]
pub enum BatchError {
    /// No source documents were supplied at all.
    #[error("no source documents to process")]
    NoInput,
}

/// Result type for the kpr library.
pub type Result<T> = std::result::Result<T, KprError>;
