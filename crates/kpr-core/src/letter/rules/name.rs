//! Organization-name extraction and normalization.

use super::patterns::{HONORIFIC, LEGAL_FORM_FULL};

/// Opening quote characters that mark a bare quoted name.
const OPENING_QUOTES: [char; 3] = ['«', '"', '\''];

/// Extract the organization name from the normalized letterhead lines.
///
/// Everything above the first line mentioning "ИНН" is the addressing block
/// and becomes the name; without such a line the first line is taken
/// verbatim. Normalization then strips a leading honorific, prepends the
/// default legal form to bare quoted names, and collapses the full
/// limited-liability phrase to its abbreviation.
pub fn extract_name(lines: &[String], default_legal_form: &str) -> String {
    let raw = match lines.iter().position(|line| line.contains("ИНН")) {
        Some(k) => lines[..k]
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join(" "),
        None => lines
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default(),
    };

    normalize_name(&raw, default_legal_form)
}

/// Apply the post-extraction name transforms. Order matters: the honorific
/// strip must run first, otherwise a quoted name hidden behind "Руководителю"
/// never receives its legal-form prefix.
pub fn normalize_name(raw: &str, default_legal_form: &str) -> String {
    let mut name = HONORIFIC.replace(raw.trim(), "").trim().to_string();

    if name.starts_with(OPENING_QUOTES) {
        name = format!("{default_legal_form} {name}");
    }

    name.replace(LEGAL_FORM_FULL, default_legal_form)
}
