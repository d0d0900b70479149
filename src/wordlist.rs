use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Loads candidates from a newline-delimited wordlist.
///
/// Lines are trimmed and blanks skipped; invalid UTF-8 is decoded lossily.
/// A word without a `.` additionally yields one variant per configured
/// extension, emitted directly after the base word so queue order follows
/// file order.
pub fn load_candidates(path: &Path, extensions: &[String]) -> Result<Vec<String>> {
    let raw = fs::read(path).map_err(|source| Error::Wordlist {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&raw);

    let mut candidates = Vec::new();
    for line in text.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        candidates.push(word.to_string());
        if !word.contains('.') {
            for ext in extensions {
                candidates.push(format!("{}{}", word, ext));
            }
        }
    }

    Ok(candidates)
}
