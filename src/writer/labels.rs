//! Writers for the edge list and the name table.

use crate::model::{EncodedHierarchy, LabelTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one `<parent-id> <child-id>` line per edge of the encoded hierarchy.
///
/// # Example
/// ```
/// use class_hierarchy::encoding::encode;
/// use class_hierarchy::indented::parse_str;
/// use class_hierarchy::writer::write_edges;
///
/// let hierarchy = parse_str("Root\n- Child1\n- Child2\n  - Grandchild1")?;
/// let (encoded, _) = encode(&hierarchy, std::iter::empty::<&str>());
///
/// let mut out = Vec::new();
/// write_edges(&mut out, &encoded)?;
/// assert_eq!(String::from_utf8(out)?, "1 2\n1 3\n3 4\n");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_edges<W: Write>(mut writer: W, encoded: &EncodedHierarchy) -> io::Result<()> {
    for (parent, child) in encoded.edges() {
        writeln!(writer, "{parent} {child}")?;
    }
    writer.flush()
}

/// Writes one `<id> <name>` line per label, identifiers ascending from 1.
pub fn write_names<W: Write>(mut writer: W, labels: &LabelTable) -> io::Result<()> {
    for (id, name) in labels.iter() {
        writeln!(writer, "{id} {name}")?;
    }
    writer.flush()
}

/// Writes the edge list to a file, replacing existing content.
pub fn write_edges_file<P: AsRef<Path>>(path: P, encoded: &EncodedHierarchy) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    write_edges(writer, encoded)
}

/// Writes the name table to a file, replacing existing content.
pub fn write_names_file<P: AsRef<Path>>(path: P, labels: &LabelTable) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    write_names(writer, labels)
}
