//! Letter parser composing the normalizer and field rules into a record.

use tracing::debug;

use crate::models::record::ExtractedRecord;

use super::normalizer::normalize_lines;
use super::rules::{
    extract_address, extract_emails, extract_inn, extract_name, extract_phones,
};

/// Heuristic parser turning raw paragraph lines into an [`ExtractedRecord`].
///
/// Extraction is a pure function of the input lines: no field ever fails on
/// a missing match, and the same input always yields the same record.
pub struct LetterParser {
    default_legal_form: String,
}

impl LetterParser {
    /// Create a parser with the standard "ООО" legal-form abbreviation.
    pub fn new() -> Self {
        Self {
            default_legal_form: "ООО".to_string(),
        }
    }

    /// Set the legal-form abbreviation prepended to bare quoted names.
    pub fn with_default_legal_form(mut self, form: impl Into<String>) -> Self {
        self.default_legal_form = form.into();
        self
    }

    /// Parse raw paragraph lines into a record.
    ///
    /// The record's `sequence_number` stays 0; the batch aggregator assigns
    /// it after noise filtering.
    pub fn parse(&self, lines: &[String]) -> ExtractedRecord {
        let normalized = normalize_lines(lines);
        let joined = normalized.join(" ");

        let name = extract_name(&normalized, &self.default_legal_form);
        let inn = extract_inn(&joined);
        let address = extract_address(&joined);
        let emails = extract_emails(&joined);
        let phones = extract_phones(&joined, &inn);

        debug!(
            name = %name,
            inn = %inn,
            emails = emails.len(),
            phones = phones.len(),
            "parsed letterhead"
        );

        ExtractedRecord {
            sequence_number: 0,
            name,
            inn,
            address,
            emails,
            phones,
            source_text: normalized.join("\n"),
        }
    }
}

impl Default for LetterParser {
    fn default() -> Self {
        Self::new()
    }
}
