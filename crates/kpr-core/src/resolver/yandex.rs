//! Best-effort tax-ID lookup through Yandex search results.
//!
//! This is screen scraping of an unstable result page, not an API contract:
//! every success is opportunistic enrichment, every failure is logged and
//! swallowed. One outbound request per call, jittered to avoid throttling.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::error::ResolverError;
use crate::letter::rules::patterns::{DIGIT_RUN, HTML_TAG, INN_LABEL};
use crate::letter::rules::validate_inn;
use crate::models::config::ResolverConfig;

use super::InnResolver;

const SEARCH_URL: &str = "https://yandex.ru/search/";

/// Identifying headers are rotated per call from a small fixed pool.
const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

/// How far past an "ИНН" label the result text is scanned for digit runs.
const SCAN_WINDOW_BYTES: usize = 240;

/// Search-backed resolver with a blocking HTTP client.
pub struct YandexResolver {
    client: reqwest::blocking::Client,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl YandexResolver {
    /// Build a resolver from configuration.
    pub fn new(config: &ResolverConfig) -> Result<Self, ResolverError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
        })
    }

    fn lookup(&self, organization_name: &str) -> Result<String, ResolverError> {
        let query = format!("ИНН {organization_name}");
        let user_agent = USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0]);

        debug!(query = %query, "searching for tax ID");

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("text", query.as_str())])
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT_LANGUAGE, "ru-RU,ru;q=0.9")
            .send()?;

        if !response.status().is_success() {
            return Err(ResolverError::Status(response.status().as_u16()));
        }

        let body = response.text()?;
        find_valid_inn(&body).ok_or(ResolverError::NoCandidate)
    }

    fn jitter(&self) {
        if self.max_delay_ms == 0 {
            return;
        }
        let span = self.min_delay_ms..=self.max_delay_ms.max(self.min_delay_ms);
        let delay = rand::thread_rng().gen_range(span);
        std::thread::sleep(Duration::from_millis(delay));
    }
}

impl InnResolver for YandexResolver {
    fn resolve(&self, organization_name: &str) -> Option<String> {
        self.jitter();

        match self.lookup(organization_name) {
            Ok(inn) => {
                debug!(name = %organization_name, inn = %inn, "resolved tax ID");
                Some(inn)
            }
            Err(e) => {
                warn!(name = %organization_name, error = %e, "tax ID lookup failed");
                None
            }
        }
    }
}

/// Scan scraped result text for the first checksum-valid tax ID near an
/// "ИНН" label. Tags are replaced with spaces first, so the scan sees the
/// page roughly as rendered text.
pub(crate) fn find_valid_inn(html: &str) -> Option<String> {
    let text = HTML_TAG.replace_all(html, " ");

    for label in INN_LABEL.find_iter(&text) {
        let mut end = (label.end() + SCAN_WINDOW_BYTES).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let window = &text[label.end()..end];

        for run in DIGIT_RUN.find_iter(window) {
            let candidate = run.as_str();
            if candidate.len() != 10 && candidate.len() != 12 {
                continue;
            }
            // Digit runs inside dashed numbers (dates, account fragments)
            // are not standalone tax IDs.
            let before = window[..run.start()].chars().next_back();
            let after = window[run.end()..].chars().next();
            if before == Some('-') || after == Some('-') {
                continue;
            }
            if validate_inn(candidate) {
                return Some(candidate.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_valid_inn_in_snippet() {
        let html = r#"<li class="serp-item"><b>ООО Ромашка</b> ИНН 7707083893, ОГРН 1027700132195</li>"#;
        assert_eq!(find_valid_inn(html), Some("7707083893".to_string()));
    }

    #[test]
    fn test_invalid_checksum_skipped() {
        let html = "<div>ИНН 7707083894</div><div>ИНН 7707083893</div>";
        assert_eq!(find_valid_inn(html), Some("7707083893".to_string()));
    }

    #[test]
    fn test_dashed_runs_skipped() {
        let html = "<div>ИНН каталог 1234-7707083893</div>";
        assert_eq!(find_valid_inn(html), None);
    }

    #[test]
    fn test_no_label_means_no_candidate() {
        let html = "<div>ОГРН 7707083893</div>";
        assert_eq!(find_valid_inn(html), None);
    }

    #[test]
    fn test_digits_inside_tags_invisible() {
        let html = r#"<a href="/7707083893">ИНН не указан</a>"#;
        assert_eq!(find_valid_inn(html), None);
    }
}
