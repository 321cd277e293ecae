//! Data models for records and configuration.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, KprConfig, ResolverConfig};
pub use record::{ExtractedRecord, TABLE_HEADER, request_number, safe_file_stem};
