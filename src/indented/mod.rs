//! Parser for class hierarchies written as indented text.
//!
//! This module provides [IndentedParser] to turn an indented tree
//! description into a [Hierarchy].
//!
//! # Quick API
//! * [`parse_file`] - parses a file
//! * [`parse_str`] - parses a string
//!
//! # Format
//! * One node per non-blank line, blank lines are ignored
//! * Depth is given by the leading run of spaces and hyphens,
//!   two characters per level: `Root`, `- Child`, `  - Grandchild`
//! * Tabs or other whitespace in the indentation are rejected
//! * Files where one level is written as `-- Name` (three marker characters,
//!   `---- Name` for two levels) are not accepted, as their marker counts are odd
//! * A node is the child of the closest preceding node one level up
//! * Several unindented nodes make the hierarchy a forest
//! * Trailing spaces and question marks are dropped: `- Gull ?` → `Gull`
//! * A parenthetical annotation is dropped: `- Bird (rare)` → `Bird`
//! * Names must be unique within the whole hierarchy

mod defs;
pub mod parser;

pub use parser::IndentedParser;

use crate::model::Hierarchy;
use crate::parser::ParsingError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses an indented hierarchy file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [Hierarchy] - All nodes in discovery order
/// * [ParsingError] - If reading fails or the indentation or names are invalid
///
/// # Example
/// ```no_run
/// use class_hierarchy::indented::parse_file;
///
/// let hierarchy = parse_file("cub-hierarchy.txt")?;
/// println!("Parsed {} classes", hierarchy.num_nodes());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Hierarchy, ParsingError> {
    let reader = BufReader::new(File::open(path)?);
    IndentedParser::new().parse_reader(reader)
}

/// Parses an indented hierarchy from a string.
///
/// # Example
/// ```
/// use class_hierarchy::indented::parse_str;
///
/// let hierarchy = parse_str("Pelicans\n- Brown Pelican\n- White Pelican")?;
/// assert_eq!(hierarchy.num_edges(), 2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<Hierarchy, ParsingError> {
    IndentedParser::new().parse_str(text.as_ref())
}
