//! Writers for encoded hierarchies.
//!
//! * [write_edges] / [write_edges_file] - `<parent-id> <child-id>` per line
//! * [write_names] / [write_names_file] - `<id> <name>` per line
//! * [write_dot] / [render_file] - Graphviz rendering of the name-keyed hierarchy

pub mod graphviz;
pub mod labels;

pub use graphviz::{render_file, write_dot};
pub use labels::{write_edges, write_edges_file, write_names, write_names_file};
