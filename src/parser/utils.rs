//! Utility functions for splitting hierarchy lines into indentation and name.
//!
//! A hierarchy line consists of a run of marker characters (spaces and
//! hyphens) encoding its depth, followed by the node name. Trailing spaces and
//! question marks are not part of the name, and neither is a parenthetical
//! annotation such as `(rare)`.

/// Characters that make up the indentation prefix of a line
pub const MARKER_CHARS: &[char] = &[' ', '-'];

/// Characters stripped from the end of a node name
pub const TRAILING_CHARS: &[char] = &[' ', '?'];

/// Returns the number of leading marker characters of a line.
///
/// # Examples
/// ```
/// # use class_hierarchy::parser::utils::indentation_width;
/// assert_eq!(indentation_width("Birds"), 0);
/// assert_eq!(indentation_width("- Gulls"), 2);
/// assert_eq!(indentation_width("  - Kittiwake"), 4);
/// assert_eq!(indentation_width("---- Tern"), 5);
/// ```
pub fn indentation_width(line: &str) -> usize {
    line.chars().take_while(|c| MARKER_CHARS.contains(c)).count()
}

/// Checks whether the indentation prefix of a line contains whitespace other
/// than plain spaces, such as tabs.
///
/// # Examples
/// ```
/// # use class_hierarchy::parser::utils::has_foreign_indentation;
/// assert!(!has_foreign_indentation("  - Kittiwake"));
/// assert!(has_foreign_indentation("\t- Kittiwake"));
/// assert!(has_foreign_indentation("- \tKittiwake"));
/// assert!(!has_foreign_indentation("Black\tTern"));
/// ```
pub fn has_foreign_indentation(line: &str) -> bool {
    line.chars()
        .take_while(|c| c.is_whitespace() || MARKER_CHARS.contains(c))
        .any(|c| !MARKER_CHARS.contains(&c))
}

/// Strips the leading markers and trailing spaces/question marks of a line.
///
/// # Examples
/// ```
/// # use class_hierarchy::parser::utils::strip_markers;
/// assert_eq!(strip_markers("  - Albatross ?"), "Albatross");
/// assert_eq!(strip_markers("Grebe"), "Grebe");
/// assert_eq!(strip_markers("- Black-footed Albatross"), "Black-footed Albatross");
/// ```
pub fn strip_markers(line: &str) -> &str {
    line.trim_start_matches(MARKER_CHARS)
        .trim_end()
        .trim_end_matches(TRAILING_CHARS)
}

/// Removes a parenthetical annotation from a name.
///
/// If `(` occurs after the first character, the name is cut before the
/// character preceding the parenthesis (usually the separating space).
///
/// # Examples
/// ```
/// # use class_hierarchy::parser::utils::strip_annotation;
/// assert_eq!(strip_annotation("Bird (rare)"), "Bird");
/// assert_eq!(strip_annotation("Heron"), "Heron");
/// assert_eq!(strip_annotation("(unsorted)"), "(unsorted)");
/// assert_eq!(strip_annotation("Ibis(x)"), "Ibi");
/// ```
pub fn strip_annotation(name: &str) -> &str {
    match name.find('(') {
        Some(pos) if pos > 0 => {
            let head = &name[..pos];
            // Also drop the character right before the parenthesis
            let cut = head.char_indices().last().map_or(0, |(i, _)| i);
            &head[..cut]
        }
        _ => name,
    }
}

/// Extracts the node name of a hierarchy line.
///
/// # Examples
/// ```
/// # use class_hierarchy::parser::utils::node_name;
/// assert_eq!(node_name("  - Laysan Albatross (Phoebastria) ?"), "Laysan Albatross");
/// ```
pub fn node_name(line: &str) -> &str {
    strip_annotation(strip_markers(line))
}

/// Checks whether a line contains nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
