//! Batch aggregation: sequential per-document extraction with fail-soft
//! error handling, noise filtering and dense sequence numbering.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::error::{BatchError, ExtractionError};
use crate::letter::LetterParser;
use crate::models::config::KprConfig;
use crate::models::record::ExtractedRecord;
use crate::resolver::{InnResolver, needs_resolution};

/// Input boundary: supplies ordered paragraph lines per source document.
///
/// File-format handling (.docx, legacy .doc, plain text) lives entirely
/// behind this seam; the core never sees file bytes.
pub trait DocumentReader {
    /// Read the paragraph lines of one source document.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;
}

/// One document that could not be processed.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// Path of the offending document.
    pub path: PathBuf,
    /// Human-readable cause.
    pub reason: String,
}

/// Progress report emitted after each document.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Documents handled so far, including failures and filtered noise.
    pub processed: usize,
    /// Total documents in the batch.
    pub total: usize,
}

/// Cooperative cancellation token, checked between documents.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the batch to stop before its next document.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Aggregated batch result.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Retained records in file-enumeration order, densely numbered from 1.
    pub records: Vec<ExtractedRecord>,
    /// Per-document failures, in encounter order.
    pub failures: Vec<DocumentFailure>,
    /// Records dropped by the noise filter.
    pub noise_dropped: usize,
    /// Documents handled before the run ended.
    pub processed: usize,
    /// Total documents submitted.
    pub total: usize,
    /// Whether the run stopped on a cancellation request.
    pub cancelled: bool,
}

impl BatchOutcome {
    /// User-facing one-line summary, phrased as counts rather than an abort.
    pub fn summary(&self) -> String {
        format!(
            "processed {} of {} documents: {} retained, {} filtered, {} failed",
            self.processed,
            self.total,
            self.records.len(),
            self.noise_dropped,
            self.failures.len()
        )
    }
}

/// Sequential batch processor: normalize → extract → optional resolve, one
/// document at a time. No shared mutable state crosses documents.
pub struct BatchProcessor {
    parser: LetterParser,
    noise_prefixes: Vec<String>,
    placeholder_inn: String,
    resolver: Option<Box<dyn InnResolver>>,
}

impl BatchProcessor {
    /// Build a processor from configuration, with resolution disabled.
    pub fn new(config: &KprConfig) -> Self {
        Self {
            parser: LetterParser::new()
                .with_default_legal_form(config.extraction.default_legal_form.clone()),
            noise_prefixes: config.extraction.noise_prefixes.clone(),
            placeholder_inn: config.resolver.placeholder_inn.clone(),
            resolver: None,
        }
    }

    /// Attach a tax-ID resolver, consulted for records whose extracted ID is
    /// empty or equals the configured placeholder.
    pub fn with_resolver(mut self, resolver: Box<dyn InnResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Run the batch over `paths`, reporting progress after each document.
    ///
    /// A failing document is recorded and skipped; only an empty input set
    /// is a hard error. Cancellation is honored between documents and
    /// reported through [`BatchOutcome::cancelled`].
    pub fn run<R, F>(
        &self,
        reader: &R,
        paths: &[PathBuf],
        cancel: &CancelToken,
        mut on_progress: F,
    ) -> Result<BatchOutcome, BatchError>
    where
        R: DocumentReader,
        F: FnMut(Progress),
    {
        if paths.is_empty() {
            return Err(BatchError::NoInput);
        }

        let mut outcome = BatchOutcome {
            total: paths.len(),
            ..BatchOutcome::default()
        };

        for path in paths {
            if cancel.is_cancelled() {
                outcome.cancelled = true;
                break;
            }

            match reader.read_lines(path) {
                Ok(lines) => {
                    let mut record = self.parser.parse(&lines);

                    if record.is_noise(&self.noise_prefixes) {
                        debug!(path = %path.display(), name = %record.name, "dropped noise record");
                        outcome.noise_dropped += 1;
                    } else {
                        if let Some(resolver) = &self.resolver {
                            if needs_resolution(&record.inn, &self.placeholder_inn) {
                                if let Some(inn) = resolver.resolve(&record.name) {
                                    record.inn = inn;
                                }
                            }
                        }
                        outcome.records.push(record);
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to process document");
                    outcome.failures.push(DocumentFailure {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            outcome.processed += 1;
            on_progress(Progress {
                processed: outcome.processed,
                total: outcome.total,
            });
        }

        for (i, record) in outcome.records.iter_mut().enumerate() {
            record.sequence_number = i + 1;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct MapReader(HashMap<PathBuf, Result<Vec<String>, String>>);

    impl MapReader {
        fn new(entries: &[(&str, Result<&[&str], &str>)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(path, res)| {
                        let value = match res {
                            Ok(lines) => Ok(lines.iter().map(|s| s.to_string()).collect()),
                            Err(reason) => Err(reason.to_string()),
                        };
                        (PathBuf::from(path), value)
                    })
                    .collect(),
            )
        }
    }

    impl DocumentReader for MapReader {
        fn read_lines(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
            match self.0.get(path) {
                Some(Ok(lines)) => Ok(lines.clone()),
                Some(Err(reason)) => Err(ExtractionError::Read(reason.clone())),
                None => Err(ExtractionError::Read("missing".to_string())),
            }
        }
    }

    struct FixedResolver {
        inn: &'static str,
    }

    impl InnResolver for FixedResolver {
        fn resolve(&self, _organization_name: &str) -> Option<String> {
            Some(self.inn.to_string())
        }
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_empty_input_is_a_hard_error() {
        let processor = BatchProcessor::new(&KprConfig::default());
        let reader = MapReader::new(&[]);
        let result = processor.run(&reader, &[], &CancelToken::new(), |_| {});
        assert!(matches!(result, Err(BatchError::NoInput)));
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let reader = MapReader::new(&[
            ("a.txt", Ok(&["ООО «Ромашка»", "ИНН 7707083893"][..])),
            ("b.txt", Err("unreadable")),
            ("c.txt", Ok(&["ООО «Вектор»"][..])),
        ]);
        let processor = BatchProcessor::new(&KprConfig::default());
        let outcome = processor
            .run(
                &reader,
                &paths(&["a.txt", "b.txt", "c.txt"]),
                &CancelToken::new(),
                |_| {},
            )
            .unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].path, PathBuf::from("b.txt"));
        assert_eq!(outcome.processed, 3);
    }

    #[test]
    fn test_noise_filtered_and_numbering_dense() {
        let reader = MapReader::new(&[
            ("1.txt", Ok(&["ООО «Ромашка»"][..])),
            ("2.txt", Ok(&["Добрый день!"][..])),
            ("3.txt", Ok(&["ООО «Вектор»"][..])),
            ("4.txt", Ok(&["Единая информационная система"][..])),
            ("5.txt", Ok(&["ООО «Старт»"][..])),
        ]);
        let processor = BatchProcessor::new(&KprConfig::default());
        let outcome = processor
            .run(
                &reader,
                &paths(&["1.txt", "2.txt", "3.txt", "4.txt", "5.txt"]),
                &CancelToken::new(),
                |_| {},
            )
            .unwrap();

        assert_eq!(outcome.noise_dropped, 2);
        let numbers: Vec<usize> = outcome.records.iter().map(|r| r.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(outcome.records[1].name, "ООО «Вектор»");
    }

    #[test]
    fn test_empty_name_is_not_an_error() {
        // The only line is the stop marker itself, so the letterhead is
        // empty. That yields an empty-name record, not a failure.
        let reader = MapReader::new(&[(
            "q.txt",
            Ok(&["Запрос коммерческого предложения"][..]),
        )]);
        let processor = BatchProcessor::new(&KprConfig::default());
        let outcome = processor
            .run(&reader, &paths(&["q.txt"]), &CancelToken::new(), |_| {})
            .unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "");
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_resolver_fills_missing_inn_only() {
        let reader = MapReader::new(&[
            ("a.txt", Ok(&["ООО «Ромашка»", "ИНН 7707083893"][..])),
            ("b.txt", Ok(&["ООО «Вектор»"][..])),
        ]);
        let resolver = Box::new(FixedResolver { inn: "5029069967" });
        let processor = BatchProcessor::new(&KprConfig::default()).with_resolver(resolver);
        let outcome = processor
            .run(
                &reader,
                &paths(&["a.txt", "b.txt"]),
                &CancelToken::new(),
                |_| {},
            )
            .unwrap();

        assert_eq!(outcome.records[0].inn, "7707083893");
        assert_eq!(outcome.records[1].inn, "5029069967");
    }

    #[test]
    fn test_placeholder_inn_is_re_resolved() {
        let mut config = KprConfig::default();
        config.resolver.placeholder_inn = "7707083893".to_string();

        let reader = MapReader::new(&[("a.txt", Ok(&["ООО «Ромашка»", "ИНН 7707083893"][..]))]);
        let resolver = Box::new(FixedResolver { inn: "5029069967" });
        let processor = BatchProcessor::new(&config).with_resolver(resolver);
        let outcome = processor
            .run(&reader, &paths(&["a.txt"]), &CancelToken::new(), |_| {})
            .unwrap();

        assert_eq!(outcome.records[0].inn, "5029069967");
    }

    #[test]
    fn test_progress_reported_per_document() {
        let reader = MapReader::new(&[
            ("a.txt", Ok(&["ООО «Ромашка»"][..])),
            ("b.txt", Err("unreadable")),
        ]);
        let processor = BatchProcessor::new(&KprConfig::default());
        let mut seen = Vec::new();
        processor
            .run(
                &reader,
                &paths(&["a.txt", "b.txt"]),
                &CancelToken::new(),
                |p| seen.push((p.processed, p.total)),
            )
            .unwrap();
        assert_eq!(seen, vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_cancellation_between_documents() {
        let reader = MapReader::new(&[
            ("a.txt", Ok(&["ООО «Ромашка»"][..])),
            ("b.txt", Ok(&["ООО «Вектор»"][..])),
        ]);
        let processor = BatchProcessor::new(&KprConfig::default());
        let cancel = CancelToken::new();
        let cancel_inner = cancel.clone();

        let outcome = processor
            .run(&reader, &paths(&["a.txt", "b.txt"]), &cancel, |_| {
                cancel_inner.cancel();
            })
            .unwrap();

        assert!(outcome.cancelled);
        assert_eq!(outcome.processed, 1);
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_summary_phrasing() {
        let outcome = BatchOutcome {
            processed: 5,
            total: 5,
            noise_dropped: 1,
            failures: vec![DocumentFailure {
                path: PathBuf::from("x.txt"),
                reason: "unreadable".to_string(),
            }],
            records: Vec::new(),
            cancelled: false,
        };
        assert_eq!(
            outcome.summary(),
            "processed 5 of 5 documents: 0 retained, 1 filtered, 1 failed"
        );
    }
}
