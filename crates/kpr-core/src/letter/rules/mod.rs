//! Rule-based field extractors for letterhead text.
//!
//! Each rule is a pure function over either the normalized line set or the
//! space-joined letterhead text; a missing match always yields an empty
//! value, never an error.

pub mod contacts;
pub mod inn;
pub mod name;
pub mod patterns;

pub use contacts::{extract_address, extract_emails, extract_phones};
pub use inn::{extract_inn, validate_inn};
pub use name::{extract_name, normalize_name};
