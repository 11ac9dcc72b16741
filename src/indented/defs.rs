/// Number of indentation characters per hierarchy level
pub(crate) const INDENT_WIDTH: usize = 2;

/// Initial capacity guess for the number of nodes in a hierarchy
pub(crate) const DEFAULT_NUM_NODES_GUESS: usize = 256;
