//! Letterhead normalizer: empty-line filtering and body truncation.
//!
//! Business letters carry organization identification only in the addressing
//! header; everything after the stop condition is request body text that must
//! not reach field extraction.

use super::rules::patterns::STOP_MARKER;

/// Reduce a raw paragraph sequence to its letterhead block.
///
/// Empty lines are dropped first. The kept lines are then truncated before
/// the first line whose uppercased form contains the stop marker "ЗАПРОС".
/// When no marker exists, a run of three consecutive empty lines in the raw
/// sequence serves as a visual break instead: the output ends two lines
/// before the run start, counted in raw indices.
pub fn normalize_lines(lines: &[String]) -> Vec<String> {
    let filtered: Vec<String> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect();

    if let Some(i) = filtered
        .iter()
        .position(|line| line.to_uppercase().contains(STOP_MARKER))
    {
        return filtered[..i].to_vec();
    }

    if let Some(j) = triple_blank_start(lines) {
        let cut = j.saturating_sub(2);
        return lines[..cut]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();
    }

    filtered
}

/// Index of the first empty line of the first run of three consecutive
/// empty lines, in raw indices.
fn triple_blank_start(lines: &[String]) -> Option<usize> {
    let mut run = 0usize;
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            run += 1;
            if run == 3 {
                return Some(i - 2);
            }
        } else {
            run = 0;
        }
    }
    None
}
