//! Word file ingestion.
//!
//! A source is read line by line, split on whitespace and punctuation,
//! deduplicated and fed into a [`PrefixDictionary`] without per-word messages.

use crate::config::IngestConfig;
use crate::data_structures::{DictionaryError, PrefixDictionary};
use crate::error::ingest::IngestError;
use fnv::FnvHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Tokens seen, repeats included
    pub tokens: usize,
    /// Distinct tokens offered to the dictionary
    pub unique: usize,
    /// Tokens that became new words
    pub added: usize,
    /// Tokens the dictionary already held before this run
    pub duplicates: usize,
    /// Tokens dropped for exceeding `max_word_chars`
    pub skipped: usize,
}

/// Splits a line into tokens on whitespace and the configured delimiters.
pub fn tokenize<'a>(line: &'a str, config: &'a IngestConfig) -> impl Iterator<Item = &'a str> + 'a {
    line.split(move |c: char| config.is_delimiter(c))
        .filter(|token| !token.is_empty())
}

/// Loads words from any buffered reader.
///
/// # Arguments
///
/// * `reader` - The UTF-8 word source.
/// * `dictionary` - The dictionary receiving the words.
/// * `config` - Tokenization settings.
///
/// # Returns
///
/// * `Ok(IngestReport)` - Counts for the run.
/// * `Err(IngestError::Read)` - If a line could not be read or is not valid UTF-8.
pub fn load_reader<R: BufRead>(
    reader: R,
    dictionary: &mut PrefixDictionary,
    config: &IngestConfig,
) -> Result<IngestReport, IngestError> {
    load_lines(reader, dictionary, config, Path::new("<reader>"))
}

/// Loads words from a file.
///
/// # Returns
///
/// * `Ok(IngestReport)` - Counts for the run.
/// * `Err(IngestError::FileNotFound)` - If `path` does not exist.
/// * `Err(IngestError::Read)` - If the file could not be opened or read.
pub fn load_file<P: AsRef<Path>>(
    path: P,
    dictionary: &mut PrefixDictionary,
    config: &IngestConfig,
) -> Result<IngestReport, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound(path.to_path_buf()),
        _ => IngestError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let report = load_lines(BufReader::new(file), dictionary, config, path)?;
    info!(path = %path.display(), ?report, "dictionary loaded");
    Ok(report)
}

fn load_lines<R: BufRead>(
    reader: R,
    dictionary: &mut PrefixDictionary,
    config: &IngestConfig,
    path: &Path,
) -> Result<IngestReport, IngestError> {
    let mut report = IngestReport::default();
    let mut seen = FnvHashSet::default();
    let mut unique = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| IngestError::Read {
            path: PathBuf::from(path),
            source,
        })?;

        for token in tokenize(&line, config) {
            report.tokens += 1;
            if config.max_word_chars > 0 && token.chars().count() > config.max_word_chars {
                report.skipped += 1;
                continue;
            }
            if seen.insert(token.to_string()) {
                unique.push(token.to_string());
            }
        }
    }

    report.unique = unique.len();
    for word in &unique {
        match dictionary.add(word) {
            Ok(()) => report.added += 1,
            Err(DictionaryError::DuplicateWord(_)) => report.duplicates += 1,
            // Tokens are non-empty and free of whitespace, so this cannot happen.
            Err(DictionaryError::InvalidWord) => warn!(word = word.as_str(), "tokenizer produced an invalid word"),
        }
    }

    debug!(?report, "ingestion finished");
    Ok(report)
}
