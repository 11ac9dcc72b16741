//! Error types for hierarchy and initial label parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading an indented hierarchy or an
//! initial labels file.

use std::error::Error;
use std::fmt;

/// Maximum number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 80;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================€=
/// Error types that can occur during hierarchy and initial label parsing.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    IoError(String),
    /// Node name already registered earlier in the hierarchy
    DuplicateName(String),
    /// Name is empty after stripping markers and annotations
    EmptyName,
    /// Odd number of indentation characters
    InvalidIndentation,
    /// Indentation more than one level deeper than the current depth
    UnexpectedDepth,
    /// First node of the hierarchy is indented
    IndentedRoot,
    /// Initial labels line not of the form `<ordinal> <name>`
    InvalidInitialLabel,
    /// Same name listed under two ordinals in the initial labels
    DuplicateInitialLabel(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (line number and line text).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type, 1-based line number and raw line
    pub fn at_line(kind: ParsingErrorType, line: usize, text: &str) -> Self {
        Self {
            kind,
            line,
            context: text.chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Convenience constructor for DuplicateName
    pub fn duplicate_name(name: &str, line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::DuplicateName(name.to_string()), line, text)
    }

    /// Convenience constructor for EmptyName
    pub fn empty_name(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::EmptyName, line, text)
    }

    /// Convenience constructor for InvalidIndentation
    pub fn invalid_indentation(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::InvalidIndentation, line, text)
    }

    /// Convenience constructor for UnexpectedDepth
    pub fn unexpected_depth(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::UnexpectedDepth, line, text)
    }

    /// Convenience constructor for IndentedRoot
    pub fn indented_root(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::IndentedRoot, line, text)
    }

    /// Convenience constructor for InvalidInitialLabel
    pub fn invalid_initial_label(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::InvalidInitialLabel, line, text)
    }

    /// Convenience constructor for DuplicateInitialLabel
    pub fn duplicate_initial_label(name: &str, line: usize, text: &str) -> Self {
        Self::at_line(
            ParsingErrorType::DuplicateInitialLabel(name.to_string()),
            line,
            text,
        )
    }

    /// Create a ParsingError without line context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            line: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based line where the error occurred (0 if unknown)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the (possibly shortened) text of the offending line
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::DuplicateName(name) => write!(f, "Duplicate node name: {name}")?,
            ParsingErrorType::EmptyName => write!(f, "Empty node name")?,
            ParsingErrorType::InvalidIndentation => write!(f, "Incorrect indentation")?,
            ParsingErrorType::UnexpectedDepth => write!(f, "Unexpectedly deep indentation")?,
            ParsingErrorType::IndentedRoot => write!(f, "First line must not be indented")?,
            ParsingErrorType::InvalidInitialLabel => {
                write!(f, "Invalid initial label, expected '<ordinal> <name>'")?
            }
            ParsingErrorType::DuplicateInitialLabel(name) => {
                write!(f, "Initial label listed more than once: {name}")?
            }
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
        }

        if self.line > 0 {
            write!(f, " at line {}", self.line)?;
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context: {}", self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            line: 0,
            context: String::new(),
        }
    }
}
