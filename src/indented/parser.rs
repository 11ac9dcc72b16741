//! Structs and logic to parse indented hierarchy descriptions.
//!
//! This module provides the [IndentedParser] struct, which consumes the lines
//! of an indented tree one at a time and builds a [Hierarchy].

use crate::indented::defs::{DEFAULT_NUM_NODES_GUESS, INDENT_WIDTH};
use crate::model::{Hierarchy, NodeIndex};
use crate::parser::parsing_error::ParsingError;
use crate::parser::utils::{has_foreign_indentation, indentation_width, is_blank, node_name};
use log::debug;
use std::io::BufRead;

// =#========================================================================#=
// PARSE STATE
// =#========================================================================$=
/// State threaded through the parse of a single hierarchy.
#[derive(Debug, Default)]
struct ParseState {
    /// Hierarchy built so far
    hierarchy: Hierarchy,
    /// Currently open ancestors, outermost first
    ancestor_stack: Vec<NodeIndex>,
    /// Most recently registered node
    last_node: Option<NodeIndex>,
}

// =#========================================================================#=
// INDENTED PARSER
// =#========================================================================$=
/// Parser for hierarchies given as indented text, one node per line.
///
/// Each level of depth is encoded by [two](INDENT_WIDTH) leading marker
/// characters (spaces or hyphens), for example
/// ```text
/// Birds
/// - Seabirds
///   - Albatrosses
///   - Gulls (Laridae)
/// - Waders ?
/// ```
/// The node name is the remainder of the line with trailing spaces and
/// question marks removed and a parenthetical annotation cut off.
/// Blank lines are ignored.
///
/// # Errors
/// Parsing fails on the first line that
/// * repeats an earlier node name,
/// * has an empty name,
/// * has an odd number of marker characters or is indented with tabs,
/// * is more than one level deeper than its predecessor allows, or
/// * is the first node but indented.
///
/// # Example
/// ```
/// use class_hierarchy::indented::IndentedParser;
///
/// let text = "Birds\n- Seabirds\n  - Gulls\n- Waders\n";
/// let hierarchy = IndentedParser::new().parse_str(text).unwrap();
///
/// assert_eq!(hierarchy.num_nodes(), 4);
/// assert_eq!(hierarchy.child_names("Birds").unwrap(), vec!["Seabirds", "Waders"]);
/// ```
#[derive(Debug)]
pub struct IndentedParser {
    state: ParseState,
    line_number: usize,
}

impl IndentedParser {
    /// Creates a new parser without any parsed lines.
    pub fn new() -> Self {
        Self {
            state: ParseState {
                hierarchy: Hierarchy::with_capacity(DEFAULT_NUM_NODES_GUESS),
                ancestor_stack: Vec::new(),
                last_node: None,
            },
            line_number: 0,
        }
    }

    /// Parses all lines of a string and returns the resulting [Hierarchy].
    pub fn parse_str(mut self, text: &str) -> Result<Hierarchy, ParsingError> {
        for line in text.lines() {
            self.parse_line(line)?;
        }
        Ok(self.finish())
    }

    /// Parses all lines of a reader and returns the resulting [Hierarchy].
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<Hierarchy, ParsingError> {
        for line in reader.lines() {
            self.parse_line(&line?)?;
        }
        Ok(self.finish())
    }

    /// Parses the next line of the hierarchy description.
    ///
    /// Line numbers reported in errors count every call to this method,
    /// including blank lines.
    pub fn parse_line(&mut self, line: &str) -> Result<(), ParsingError> {
        self.line_number += 1;
        let line_number = self.line_number;
        let line = line.trim_end_matches(['\r', '\n']);
        if is_blank(line) {
            return Ok(());
        }

        // Only spaces and hyphens have a defined width
        if has_foreign_indentation(line) {
            return Err(ParsingError::invalid_indentation(line_number, line));
        }

        let state = &mut self.state;

        let name = node_name(line);
        if state.hierarchy.contains(name) {
            return Err(ParsingError::duplicate_name(name, line_number, line));
        }
        if name.is_empty() {
            return Err(ParsingError::empty_name(line_number, line));
        }

        let indentation = indentation_width(line);
        if indentation % INDENT_WIDTH != 0 {
            return Err(ParsingError::invalid_indentation(line_number, line));
        }
        let level = indentation / INDENT_WIDTH;
        let depth = state.ancestor_stack.len();
        if level > depth + 1 {
            return Err(ParsingError::unexpected_depth(line_number, line));
        }

        if level > depth {
            // One level deeper: the previous node becomes the parent
            match state.last_node {
                Some(last) => state.ancestor_stack.push(last),
                None => return Err(ParsingError::indented_root(line_number, line)),
            }
        } else if level < depth {
            state.ancestor_stack.truncate(level);
        }

        let Some(node) = state.hierarchy.insert(name) else {
            unreachable!("duplicate names are rejected above");
        };
        if let Some(&parent) = state.ancestor_stack.last() {
            state.hierarchy.add_child(parent, node);
        }
        state.last_node = Some(node);

        Ok(())
    }

    /// Returns the number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Consumes the parser and returns the [Hierarchy] built so far.
    pub fn finish(self) -> Hierarchy {
        let hierarchy = self.state.hierarchy;
        debug!(
            "Parsed hierarchy with {} nodes and {} edges from {} lines",
            hierarchy.num_nodes(),
            hierarchy.num_edges(),
            self.line_number
        );
        hierarchy
    }
}

impl Default for IndentedParser {
    fn default() -> Self {
        Self::new()
    }
}
