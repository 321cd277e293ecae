//! Core library for commercial-proposal request processing.
//!
//! This crate provides:
//! - Letterhead normalization (stop-marker and blank-run truncation)
//! - Heuristic field extraction (name, ИНН, address, e-mails, phones)
//! - Best-effort tax-ID resolution through web search
//! - Batch aggregation with noise filtering and dense numbering
//! - Curated record selection for targeted document generation

pub mod batch;
pub mod error;
pub mod letter;
pub mod models;
pub mod resolver;
pub mod selection;

pub use batch::{
    BatchOutcome, BatchProcessor, CancelToken, DocumentFailure, DocumentReader, Progress,
};
pub use error::{BatchError, ExtractionError, KprError, ResolverError, Result};
pub use letter::{LetterParser, normalize_lines};
pub use letter::rules::validate_inn;
pub use models::config::KprConfig;
pub use models::record::{
    ExtractedRecord, Requisites, TABLE_HEADER, request_number, safe_file_stem, unique_path,
};
pub use resolver::{InnResolver, NoopResolver, YandexResolver};
pub use selection::Selection;
