//! Reader for initial label files.
//!
//! An initial label file fixes the identifiers of known classes, one
//! `<ordinal> <name>` entry per line:
//! ```text
//! 1 Black footed Albatross
//! 2 Laysan Albatross
//! 3 Sooty Albatross
//! ```
//! Entries are ordered by ordinal; the k-th smallest ordinal receives the
//! identifier k, regardless of its literal value.

use crate::parser::parsing_error::ParsingError;
use crate::parser::utils::is_blank;
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads initial labels from a file, returning names in ordinal order.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ParsingError> {
    let reader = BufReader::new(File::open(path)?);
    read(reader)
}

/// Reads initial labels from a string, returning names in ordinal order.
///
/// # Example
/// ```
/// use class_hierarchy::encoding::initial_labels::parse_str;
///
/// let labels = parse_str("20 Gray Catbird\n3 Sooty Albatross\n").unwrap();
/// assert_eq!(labels, vec!["Sooty Albatross", "Gray Catbird"]);
/// ```
pub fn parse_str(text: &str) -> Result<Vec<String>, ParsingError> {
    read(text.as_bytes())
}

/// Reads initial labels from a reader, returning names in ordinal order.
///
/// # Errors
/// * [InvalidInitialLabel](crate::parser::ParsingErrorType::InvalidInitialLabel)
///   if a line has no name or its ordinal is not an integer
/// * [DuplicateInitialLabel](crate::parser::ParsingErrorType::DuplicateInitialLabel)
///   if a name is listed under two different ordinals
///
/// A repeated ordinal replaces the earlier entry.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<String>, ParsingError> {
    let mut by_ordinal: BTreeMap<i64, Entry> = BTreeMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;
        if is_blank(&line) {
            continue;
        }

        let (ordinal, name) = split_entry(&line)
            .ok_or_else(|| ParsingError::invalid_initial_label(line_number, &line))?;
        let entry = Entry {
            name: name.to_string(),
            line_number,
            text: line.clone(),
        };
        if let Some(replaced) = by_ordinal.insert(ordinal, entry) {
            warn!(
                "Initial label {ordinal} ('{}') replaced by '{name}' at line {line_number}",
                replaced.name
            );
        }
    }

    // Names must be unique, otherwise identifiers could not be kept.
    // Report the repetition that comes last in the file.
    let mut in_file_order: Vec<&Entry> = by_ordinal.values().collect();
    in_file_order.sort_by_key(|entry| entry.line_number);
    let mut seen: HashSet<&str> = HashSet::with_capacity(in_file_order.len());
    for entry in in_file_order {
        if !seen.insert(entry.name.as_str()) {
            return Err(ParsingError::duplicate_initial_label(
                &entry.name,
                entry.line_number,
                &entry.text,
            ));
        }
    }

    debug!("Read {} initial labels", by_ordinal.len());
    Ok(by_ordinal.into_values().map(|entry| entry.name).collect())
}

/// A parsed `<ordinal> <name>` line.
struct Entry {
    name: String,
    line_number: usize,
    text: String,
}

/// Splits a line into ordinal and name at the first whitespace run.
fn split_entry(line: &str) -> Option<(i64, &str)> {
    let line = line.trim();
    let (ordinal, name) = line.split_once(char::is_whitespace)?;
    let ordinal = ordinal.parse::<i64>().ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((ordinal, name))
}
