//! Common regex patterns for letterhead extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tax ID labeled with "ИНН"
    pub static ref INN_PATTERN: Regex = Regex::new(
        r"ИНН\s*(\d{10,12})"
    ).unwrap();

    // Honorific / address phrases opening a name
    pub static ref HONORIFIC: Regex = Regex::new(
        r"(?i)^(?:Руководителю|ИП|Индивидуальный предприниматель|Индивидуальному предпринимателю|Директору|Генеральному директору)\s*"
    ).unwrap();

    // Labeled address, terminated by the e-mail or phone label or end of text.
    // The terminator is consumed, not captured.
    pub static ref ADDRESS_PATTERN: Regex = Regex::new(
        r"(?s)(?:Адрес|Юридический адрес):\s*(.+?)(?:\sE-mail|\sТелефон|$)"
    ).unwrap();

    // Mailbox shape, intentionally loose
    pub static ref EMAIL: Regex = Regex::new(
        r"[\w.-]+@[\w.-]+"
    ).unwrap();

    // Full-match mailbox shape used when cleaning fields for composition
    pub static ref EMAIL_STRICT: Regex = Regex::new(
        r"^[\w.-]+@[\w.-]+\.\w+$"
    ).unwrap();

    // Phone: optional "+", then digits with separators, digit on both ends
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d[\d\s\-()]{6,}\d"
    ).unwrap();

    // "ИНН" label in scraped search-result text
    pub static ref INN_LABEL: Regex = Regex::new(
        r"(?i)ИНН"
    ).unwrap();

    // Maximal digit runs (resolver candidate scan)
    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"\d+"
    ).unwrap();

    // HTML tags, replaced with spaces before text search
    pub static ref HTML_TAG: Regex = Regex::new(
        r"<[^>]*>"
    ).unwrap();
}

/// Full legal-entity phrase collapsed to its abbreviation during name cleanup.
pub const LEGAL_FORM_FULL: &str = "Общество с ограниченной ответственностью";

/// Stop marker separating the addressing header from the letter body.
pub const STOP_MARKER: &str = "ЗАПРОС";
