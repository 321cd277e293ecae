//! ИНН (Russian Tax Identification Number) extraction and validation.

use super::patterns::INN_PATTERN;

/// Extract the first labeled tax ID from the joined letterhead text.
///
/// Takes the digit run after "ИНН" verbatim. No checksum validation happens
/// here: an ID printed in the letter is trusted as-is, and validation is
/// reserved for candidates obtained through the search resolver.
pub fn extract_inn(text: &str) -> String {
    INN_PATTERN
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Validate a Russian tax ID using the weighted checksum.
///
/// 10-digit IDs use weights [2, 4, 10, 3, 5, 9, 4, 6, 8]; 12-digit IDs use
/// [7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0]. The weighted sum over all digits but
/// the last, mod 11 mod 10, must equal the last digit.
pub fn validate_inn(inn: &str) -> bool {
    let digits: Vec<u32> = inn.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != inn.chars().count() {
        return false;
    }

    let weights: &[u32] = match digits.len() {
        10 => &[2, 4, 10, 3, 5, 9, 4, 6, 8],
        12 => &[7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0],
        _ => return false,
    };

    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();

    sum % 11 % 10 == digits[digits.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_inn_labeled() {
        let text = "ООО \"Ромашка\" ИНН 7707083893 Адрес: г. Москва";
        assert_eq!(extract_inn(text), "7707083893");
    }

    #[test]
    fn test_extract_inn_no_space_after_label() {
        assert_eq!(extract_inn("ИНН5029069967"), "5029069967");
    }

    #[test]
    fn test_extract_inn_missing() {
        assert_eq!(extract_inn("ООО \"Ромашка\", г. Москва"), "");
    }

    #[test]
    fn test_extract_inn_twelve_digits() {
        assert_eq!(extract_inn("ИП Иванов ИНН 500100732295"), "500100732295");
    }

    #[test]
    fn test_validate_inn_valid_ten() {
        assert!(validate_inn("7707083893"));
    }

    #[test]
    fn test_validate_inn_altered_last_digit() {
        assert!(!validate_inn("7707083894"));
    }

    #[test]
    fn test_validate_inn_valid_twelve() {
        // 500100732295: weighted sum 148, 148 % 11 % 10 == 5
        assert!(validate_inn("500100732295"));
        assert!(!validate_inn("500100732294"));
    }

    #[test]
    fn test_validate_inn_wrong_length() {
        assert!(!validate_inn("123456789"));
        assert!(!validate_inn("12345678901"));
        assert!(!validate_inn(""));
    }

    #[test]
    fn test_validate_inn_non_digits() {
        assert!(!validate_inn("77070838a3"));
    }
}
