//! Class-hierarchy is a library to encode class hierarchies, written as
//! indented text, into numeric parent-child tuples.
//!
//! It turns a human-authored hierarchy such as
//! ```text
//! Seabirds
//! - Albatrosses
//!   - Laysan Albatross
//!   - Sooty Albatross (Phoebetria)
//! - Gulls
//! ```
//! into a table of class names with permanent numeric identifiers and a list of
//! `(parent, child)` identifier pairs, as used as training metadata for
//! hierarchical classifiers. Identifiers of already labelled classes (e.g. the
//! labels of a dataset) can be kept fixed.
//!
//! Core functionality provided:
//! - Parser: [indented] reads the indented format into a [Hierarchy] and
//!   validates indentation and name uniqueness.
//! - Encoder: [encoding] assigns identifiers via a [LabelTable], seeded with
//!   optional initial labels, producing an [EncodedHierarchy].
//! - Writers: [writer] writes the edge list, the name table and an optional
//!   Graphviz rendering.
//!
//! # Example
//! ```
//! use class_hierarchy::{encode, parse_hierarchy_str};
//!
//! let hierarchy = parse_hierarchy_str("Root\n- Child1\n- Child2\n  - Grandchild1")?;
//! let (encoded, labels) = encode(&hierarchy, ["Grandchild1"]);
//!
//! assert_eq!(labels.names(), &["Grandchild1", "Root", "Child1", "Child2"]);
//! assert_eq!(encoded.edges().collect::<Vec<_>>(), vec![(2, 3), (2, 4), (4, 1)]);
//! # Ok::<(), class_hierarchy::parser::ParsingError>(())
//! ```

pub mod encoding;
pub mod indented;
pub mod model;
pub mod parser;
pub mod writer;

pub use crate::encoding::encode;
pub use crate::model::{EncodedHierarchy, Hierarchy, LabelId, LabelTable};
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses an indented hierarchy file into a [Hierarchy].
///
/// See [`indented::parse_file`] for full documentation.
pub fn parse_hierarchy_file<P: AsRef<Path>>(path: P) -> Result<Hierarchy, ParsingError> {
    indented::parse_file(path)
}

/// Parses an indented hierarchy string into a [Hierarchy].
///
/// See [`indented::parse_str`] for full documentation.
pub fn parse_hierarchy_str<S: AsRef<str>>(text: S) -> Result<Hierarchy, ParsingError> {
    indented::parse_str(text)
}

/// Reads an initial labels file, returning the names ordered by ordinal.
///
/// See [`encoding::initial_labels::read`] for full documentation.
pub fn read_initial_labels<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ParsingError> {
    encoding::initial_labels::read_file(path)
}
