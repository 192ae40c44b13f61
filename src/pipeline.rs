use futures::stream::{self, StreamExt};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::TranslatorConfig;
use crate::error::{Result, SubtransError};
use crate::language::LanguagePair;
use crate::subtitle::{LineRecord, SubtitleDocument, TranslationResult};
use crate::translate::{Translator, TranslatorFactory};

/// Outcome of one successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub total_lines: usize,
    pub translatable_lines: usize,
    /// Lines kept untranslated because the translator failed on them
    pub fallback_lines: usize,
    /// Translations holding a line break; each adds lines to the output
    pub multiline_lines: usize,
    pub backup_path: PathBuf,
    pub elapsed: Duration,
}

pub struct Pipeline {
    config: TranslatorConfig,
    translator: Box<dyn Translator>,
}

impl Pipeline {
    pub fn new(config: TranslatorConfig) -> Self {
        let translator = TranslatorFactory::create_translator(config.clone());
        Self::with_translator(config, translator)
    }

    pub fn with_translator(config: TranslatorConfig, translator: Box<dyn Translator>) -> Self {
        Self { config, translator }
    }

    /// Translate a subtitle file in place, keeping the original as `<name>_`.
    ///
    /// `progress` is called with `(completed, total)` as each line finishes.
    pub async fn run<P, F>(&self, path: P, pair: &LanguagePair, progress: F) -> Result<RunReport>
    where
        P: AsRef<Path>,
        F: FnMut(usize, usize),
    {
        let started = Instant::now();
        let path = path.as_ref();
        info!("Translating {} ({})", path.display(), pair);

        if !path.exists() {
            return Err(SubtransError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).await?;
        let mut document = SubtitleDocument::parse(&content);
        let records = document.translatable_lines();
        let translatable_lines = records.len();
        info!(
            "{} lines, {} to translate",
            document.len(),
            translatable_lines
        );

        let results = self.translate_records(records, pair, progress).await;
        let fallback_lines = results.iter().filter(|r| r.fell_back).count();
        if fallback_lines > 0 {
            warn!(
                "{} of {} lines were left untranslated",
                fallback_lines, translatable_lines
            );
        }

        let multiline_lines = results.iter().filter(|r| r.spans_lines()).count();
        if multiline_lines > 0 {
            warn!(
                "{} translations contain line breaks; output has more lines than input",
                multiline_lines
            );
        }

        document.apply(results);
        let backup_path = self.replace_with_backup(path, &document.render()).await?;

        let report = RunReport {
            total_lines: document.len(),
            translatable_lines,
            fallback_lines,
            multiline_lines,
            backup_path,
            elapsed: started.elapsed(),
        };
        info!("Finished {} in {:?}", path.display(), report.elapsed);
        Ok(report)
    }

    /// Translate every record concurrently and collect results in completion
    /// order. A failed line comes back with its original text.
    pub async fn translate_records<F>(
        &self,
        records: Vec<LineRecord>,
        pair: &LanguagePair,
        mut progress: F,
    ) -> Vec<TranslationResult>
    where
        F: FnMut(usize, usize),
    {
        let total = records.len();
        let limit = match self.config.concurrency_limit() {
            Some(limit) => limit,
            None => {
                if total > self.config.warn_fanout_above {
                    warn!(
                        "Starting {} translator processes at once; use --jobs to bound concurrency",
                        total
                    );
                }
                total.max(1)
            }
        };
        debug!("Dispatching {} lines, at most {} in flight", total, limit);

        let translator = self.translator.as_ref();
        let mut pending = stream::iter(records)
            .map(|record| async move {
                match translator.translate_line(&record.text, pair).await {
                    Ok(text) => {
                        if text.contains('\n') {
                            warn!(
                                "Line {} translated to several lines: {:?}",
                                record.index + 1,
                                text
                            );
                        }
                        TranslationResult {
                            index: record.index,
                            text,
                            fell_back: false,
                        }
                    }
                    Err(e) => {
                        warn!("Line {} left untranslated: {}", record.index + 1, e);
                        TranslationResult {
                            index: record.index,
                            text: record.text,
                            fell_back: true,
                        }
                    }
                }
            })
            .buffer_unordered(limit);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = pending.next().await {
            results.push(result);
            progress(results.len(), total);
        }
        results
    }

    async fn replace_with_backup(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let backup = backup_path(path);

        fs::rename(path, &backup)
            .await
            .map_err(|source| SubtransError::Backup {
                original: path.to_path_buf(),
                backup: backup.clone(),
                source,
            })?;

        fs::write(path, content)
            .await
            .map_err(|source| SubtransError::Write {
                path: path.to_path_buf(),
                backup: backup.clone(),
                source,
            })?;

        debug!("Original kept at {}", backup.display());
        Ok(backup)
    }
}

/// Sibling path with a trailing underscore appended to the file name
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push("_");
    PathBuf::from(name)
}
