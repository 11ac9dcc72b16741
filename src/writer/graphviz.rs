//! Graphviz rendering of a name-keyed [Hierarchy].
//!
//! The hierarchy is drawn as a left-to-right directed graph; leaves are filled
//! white and inner nodes light gray. Output is DOT source, which can be turned
//! into an image by the Graphviz `dot` program, see [render_file].

use crate::model::Hierarchy;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

const LEAF_FILL_COLOR: &str = "#ffffff";
const INNER_FILL_COLOR: &str = "#eaeaea";

/// File extensions that are rendered with `dot` instead of written as DOT source
const IMAGE_FORMATS: &[&str] = &["svg", "png", "pdf"];

/// Writes the hierarchy as a DOT digraph.
///
/// # Example
/// ```
/// use class_hierarchy::indented::parse_str;
/// use class_hierarchy::writer::write_dot;
///
/// let hierarchy = parse_str("Terns\n- Arctic Tern")?;
/// let mut out = Vec::new();
/// write_dot(&mut out, &hierarchy)?;
///
/// let dot = String::from_utf8(out)?;
/// assert!(dot.contains("\"Terns\" -> \"Arctic Tern\";"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_dot<W: Write>(mut writer: W, hierarchy: &Hierarchy) -> io::Result<()> {
    writeln!(writer, "digraph {{")?;
    writeln!(writer, "  rankdir=LR;")?;
    writeln!(writer, "  node [style=filled];")?;
    for node in hierarchy.iter() {
        let fill = if node.is_leaf() {
            LEAF_FILL_COLOR
        } else {
            INNER_FILL_COLOR
        };
        writeln!(writer, "  {} [fillcolor=\"{fill}\"];", quote(node.name()))?;
    }
    for (parent, child) in hierarchy.edges() {
        writeln!(writer, "  {} -> {};", quote(parent), quote(child))?;
    }
    writeln!(writer, "}}")?;
    writer.flush()
}

/// Writes a rendering of the hierarchy to `path`.
///
/// If the extension of `path` is an image format (`svg`, `png`, `pdf`), the
/// DOT source is piped through `dot -T<ext>`, which must be on the `PATH`.
/// Any other path receives the DOT source itself.
pub fn render_file<P: AsRef<Path>>(path: P, hierarchy: &Hierarchy) -> io::Result<()> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| IMAGE_FORMATS.contains(&ext.as_str()));

    match format {
        Some(format) => render_with_dot(path, &format, hierarchy),
        None => {
            let writer = BufWriter::new(File::create(path)?);
            write_dot(writer, hierarchy)
        }
    }
}

fn render_with_dot(path: &Path, format: &str, hierarchy: &Hierarchy) -> io::Result<()> {
    debug!("Rendering hierarchy as {format} with dot");
    let mut child = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .spawn()?;
    feed_and_wait(&mut child, hierarchy)
}

/// Writes the DOT source to the stdin of `child` and waits for it to exit.
///
/// The child is reaped even if writing fails.
fn feed_and_wait(child: &mut Child, hierarchy: &Hierarchy) -> io::Result<()> {
    // Stdin is closed when the writer is dropped, before waiting
    let written = match child.stdin.take() {
        Some(stdin) => write_dot(BufWriter::new(stdin), hierarchy),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    if !status.success() {
        return Err(io::Error::other(format!("renderer exited with {status}")));
    }
    Ok(())
}

/// Quotes a name as a DOT identifier.
fn quote(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
