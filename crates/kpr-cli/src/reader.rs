//! Plain-text document reader: one paragraph per line.
//!
//! Word-processor formats stay behind the [`DocumentReader`] seam; this
//! reader consumes text exported from them (or written directly), which is
//! all the core pipeline needs.

use std::fs;
use std::path::Path;

use kpr_core::{DocumentReader, ExtractionError};

pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ExtractionError::Read(format!("{}: {}", path.display(), e)))?;

        Ok(content.lines().map(|line| line.to_string()).collect())
    }
}
