//! Address, e-mail and phone extraction from the joined letterhead text.

use super::patterns::{ADDRESS_PATTERN, EMAIL, PHONE};

/// Extract the labeled address, trimmed.
///
/// The capture runs from "Адрес:" or "Юридический адрес:" up to the next
/// " E-mail" or " Телефон" label, or to the end of the text.
pub fn extract_address(text: &str) -> String {
    ADDRESS_PATTERN
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Extract all e-mail addresses in order of appearance, duplicates kept.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract all phone numbers in order of appearance.
///
/// A bare tax-ID digit run satisfies the phone shape too, so any candidate
/// whose digits equal `extracted_inn` is dropped.
pub fn extract_phones(text: &str, extracted_inn: &str) -> Vec<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| {
            if extracted_inn.is_empty() {
                return true;
            }
            let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
            digits != extracted_inn
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_address_terminated_by_email_label() {
        let text = "ИНН 7707083893 Адрес: г. Москва, ул. Ленина 1 E-mail: info@romashka.ru";
        assert_eq!(extract_address(text), "г. Москва, ул. Ленина 1");
    }

    #[test]
    fn test_address_terminated_by_phone_label() {
        let text = "Юридический адрес: г. Тула, пр. Мира 5 Телефон: +7 4872 12-34-56";
        assert_eq!(extract_address(text), "г. Тула, пр. Мира 5");
    }

    #[test]
    fn test_address_runs_to_end_of_text() {
        let text = "Адрес: 300041, г. Тула, пр. Ленина 2";
        assert_eq!(extract_address(text), "300041, г. Тула, пр. Ленина 2");
    }

    #[test]
    fn test_address_missing() {
        assert_eq!(extract_address("ООО «Ромашка» ИНН 7707083893"), "");
    }

    #[test]
    fn test_emails_in_order_with_duplicates() {
        let text = "E-mail: info@romashka.ru, sales@romashka.ru, info@romashka.ru";
        assert_eq!(
            extract_emails(text),
            vec!["info@romashka.ru", "sales@romashka.ru", "info@romashka.ru"]
        );
    }

    #[test]
    fn test_emails_missing() {
        assert!(extract_emails("Телефон: +7 999 123-45-67").is_empty());
    }

    #[test]
    fn test_phones_with_separators() {
        let text = "Телефон: +7 (4872) 25-13-07, 8 800 555-35-35";
        assert_eq!(
            extract_phones(text, ""),
            vec!["+7 (4872) 25-13-07", "8 800 555-35-35"]
        );
    }

    #[test]
    fn test_phone_excludes_tax_id_run() {
        let text = "ИНН 7707083893 Телефон: +7 999 123-45-67";
        assert_eq!(extract_phones(text, "7707083893"), vec!["+7 999 123-45-67"]);
    }

    #[test]
    fn test_short_digit_runs_ignored() {
        assert!(extract_phones("дом 12, корпус 3", "").is_empty());
    }
}
