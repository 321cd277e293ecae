//! Extracted-record data model and composition helpers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::letter::rules::patterns::EMAIL_STRICT;

/// Placeholder for a missing requisite value on composed documents.
const NOT_SPECIFIED: &str = "не указан";

/// Column headers for the tabular output, in the fixed emission order.
pub const TABLE_HEADER: [&str; 7] = [
    "Номер п/п",
    "Наименование",
    "ИНН",
    "Адрес",
    "Электронная почта",
    "Телефон",
    "Исходная информация",
];

/// Structured contact data extracted from one source letter.
///
/// Immutable once aggregated into a batch; `sequence_number` is assigned by
/// the aggregator after noise filtering, so numbering is dense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// 1-based position in the retained batch (0 until aggregation).
    #[serde(default)]
    pub sequence_number: usize,

    /// Organization or individual name, normalized.
    pub name: String,

    /// Tax ID: 10 or 12 digits, or empty when not found.
    pub inn: String,

    /// Free-text address, possibly empty.
    pub address: String,

    /// E-mail addresses in order of appearance.
    pub emails: Vec<String>,

    /// Phone numbers in order of appearance.
    pub phones: Vec<String>,

    /// The truncated letterhead text, newline-joined, kept for audit.
    pub source_text: String,
}

impl ExtractedRecord {
    /// Render the record as one table row matching [`TABLE_HEADER`].
    pub fn to_row(&self) -> [String; 7] {
        [
            self.sequence_number.to_string(),
            self.name.clone(),
            self.inn.clone(),
            self.address.clone(),
            self.emails.join(", "),
            self.phones.join(", "),
            self.source_text.clone(),
        ]
    }

    /// Whether the name starts with one of the noise prefixes, case-folded.
    pub fn is_noise(&self, noise_prefixes: &[String]) -> bool {
        let folded = self.name.to_lowercase();
        noise_prefixes
            .iter()
            .any(|prefix| folded.starts_with(&prefix.to_lowercase()))
    }

    /// Cleaned requisites block handed to the document composer.
    ///
    /// Whitespace is collapsed, the tax ID is reduced to digits and checked
    /// for length, and the first well-formed e-mail is taken; anything
    /// missing becomes an explicit placeholder on the composed document.
    pub fn requisites(&self) -> Requisites {
        let name = clean_text(&self.name);
        Requisites {
            name: if name.is_empty() {
                format!("{NOT_SPECIFIED}о")
            } else {
                name
            },
            inn: clean_inn(&self.inn).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            email: self
                .emails
                .iter()
                .find_map(|e| clean_email(e))
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        }
    }
}

/// Requisite fields printed at the top of a composed request document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requisites {
    pub name: String,
    pub inn: String,
    pub email: String,
}

/// Zero-padded sequential request number for the numbered-document variant.
pub fn request_number(sequence: usize, width: usize) -> String {
    format!("{sequence:0width$}")
}

/// Derive a filesystem-safe file stem from an organization name.
///
/// Forbidden characters become underscores and the stem is capped at 50
/// characters; an empty name falls back to an indexed placeholder.
pub fn safe_file_stem(name: &str, index: usize) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .take(50)
        .collect();

    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        format!("Документ_{index}")
    } else {
        cleaned
    }
}

/// First path in `folder` for `file_name` that does not exist yet.
///
/// Collisions get an increasing `_1`, `_2`, ... suffix on the stem, so a
/// batch can write several documents for identically named organizations.
pub fn unique_path(folder: &Path, file_name: &str) -> PathBuf {
    let candidate = folder.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };

    let mut counter = 1usize;
    loop {
        let suffixed = match extension {
            Some(ext) => format!("{stem}_{counter}.{ext}"),
            None => format!("{stem}_{counter}"),
        };
        let candidate = folder.join(&suffixed);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep only digits and accept the result when it has tax-ID length.
pub fn clean_inn(inn: &str) -> Option<String> {
    let digits: String = inn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 || digits.len() == 12 {
        Some(digits)
    } else {
        None
    }
}

/// Accept an e-mail address only when it has a full mailbox shape.
pub fn clean_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if EMAIL_STRICT.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}
