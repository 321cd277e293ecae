//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the kpr pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KprConfig {
    /// Letterhead extraction configuration.
    pub extraction: ExtractionConfig,

    /// Tax-ID lookup configuration.
    pub resolver: ResolverConfig,
}

impl Default for KprConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            resolver: ResolverConfig::default(),
        }
    }
}

/// Letterhead extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Name prefixes that mark a record as mis-extracted boilerplate,
    /// compared case-insensitively.
    pub noise_prefixes: Vec<String>,

    /// Legal-form abbreviation prepended to names that open with a quote.
    pub default_legal_form: String,

    /// Zero-padding width for sequential request numbers.
    pub request_number_width: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            noise_prefixes: vec![
                "запрос".to_string(),
                "добрый".to_string(),
                "еис".to_string(),
                "единая".to_string(),
            ],
            default_legal_form: "ООО".to_string(),
            request_number_width: 4,
        }
    }
}

/// Tax-ID lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Look up missing tax IDs through the search service.
    pub enabled: bool,

    /// A tax ID equal to this value is treated as not actually found and
    /// re-resolved (e.g. the buyer's own ID appearing on every letter).
    pub placeholder_inn: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Lower bound of the randomized pre-request delay, in milliseconds.
    pub min_delay_ms: u64,

    /// Upper bound of the randomized pre-request delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            placeholder_inn: String::new(),
            timeout_secs: 10,
            min_delay_ms: 1000,
            max_delay_ms: 3000,
        }
    }
}

impl KprConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
