//! Shared line-level parsing functionality and error types.
pub mod parsing_error;
pub mod utils;

pub use parsing_error::{ParsingError, ParsingErrorType};
