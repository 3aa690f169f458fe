//! Line-oriented `.env` parser implementation.

use crate::error::{EnvformError, Result, ResultExt};
use crate::types::{EnvEntry, EnvSet};
use std::io::BufRead;
use std::path::Path;

/// Parse `.env` entries from UTF-8 text.
///
/// Lines are handled permissively: blank lines, full-line `#` comments and
/// lines without a `=` yield no entry and no error. Later occurrences of a
/// key replace earlier ones.
#[must_use]
pub fn parse_str(input: &str) -> EnvSet {
    let mut vars = EnvSet::new();

    for (idx, raw) in input.lines().enumerate() {
        let Some(entry) = parse_line(raw) else {
            tracing::trace!(line = idx + 1, "skipped line");
            continue;
        };

        if vars.get(&entry.key).is_some() {
            tracing::debug!(
                line = idx + 1,
                key = %entry.key,
                "duplicate key, earlier entry replaced"
            );
        }
        vars.insert(entry);
    }

    vars
}

/// Parse `.env` entries from a buffered reader.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails. Callers with a
/// known path should attach it via [`ResultExt::with_path`].
pub fn parse_reader<R: BufRead>(mut reader: R) -> std::io::Result<EnvSet> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_str(&text))
}

/// Read and parse a `.env` file from disk.
///
/// # Errors
///
/// Returns [`EnvformError::InputNotFound`] if the file does not exist and
/// [`EnvformError::Io`] if it cannot be read.
pub fn parse_path(path: &Path) -> Result<EnvSet> {
    if !path.exists() {
        return Err(EnvformError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).with_path(path)?;
    Ok(parse_str(&text))
}

/// Parse a single line into an entry.
///
/// Returns `None` for blank lines, full-line comments, lines without a
/// `=`, and lines whose key trims to nothing. The split is purely
/// textual: the first `=` separates key from value, the first `#` after
/// it separates value from description. A `#` inside a quoted value is
/// not special-cased.
fn parse_line(raw: &str) -> Option<EnvEntry> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (raw_key, rest) = line.split_once('=')?;
    let key = raw_key.trim();
    if key.is_empty() {
        return None;
    }

    let (raw_value, raw_description) = match rest.split_once('#') {
        Some((value, description)) => (value, Some(description)),
        None => (rest, None),
    };

    Some(EnvEntry {
        key: key.to_string(),
        value: raw_value.trim().to_string(),
        description: raw_description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    })
}
