//! Label table assigning permanent numeric identifiers to class names.
//!
//! - `LabelTable`: Joined storage and lookup of names and their 1-based ids.

use std::collections::HashMap;
use std::fmt;

/// Permanent 1-based identifier of a class name.
pub type LabelId = usize;

// =#========================================================================#=
// LABEL TABLE
// =#========================================================================#=
/// Ordered sequence of names, where position + 1 is the permanent
/// [LabelId] of a name.
///
/// The table can be seeded with initial labels whose identifiers must be
/// kept; all other names receive the next free identifier when first seen.
/// Inserting the same name twice returns the same identifier.
///
/// # Example
/// ```
/// use class_hierarchy::model::LabelTable;
///
/// let mut table = LabelTable::with_initial_labels(["Laysan Albatross"]);
///
/// let id_albatross = table.get_or_insert("Laysan Albatross"); // seeded: 1
/// let id_petrel = table.get_or_insert("Petrels");              // new: 2
///
/// assert_eq!(id_albatross, 1);
/// assert_eq!(id_petrel, 2);
/// assert_eq!(table.get_name(2), Some("Petrels"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    /// Names in identifier order
    names: Vec<String>,
    /// Map from name to its 0-based position
    map: HashMap<String, usize>,
}

impl LabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table seeded with the given names, which receive the
    /// identifiers `1..=n` in the given order.
    ///
    /// If a name occurs more than once, only its first occurrence is kept.
    pub fn with_initial_labels<I, S>(initial_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for label in initial_labels {
            table.get_or_insert(label.as_ref());
        }
        table
    }

    /// Gets the identifier for a name, inserting it if it doesn't exist.
    ///
    /// If the name already exists, returns its existing identifier.
    /// If the name is new, assigns it the next available identifier.
    pub fn get_or_insert(&mut self, name: &str) -> LabelId {
        if let Some(&pos) = self.map.get(name) {
            pos + 1
        } else {
            let pos = self.names.len();
            self.names.push(name.to_string());
            self.map.insert(name.to_string(), pos);
            pos + 1
        }
    }

    /// Retrieves the identifier of a name.
    ///
    /// # Returns
    /// `Some(id)` if the name exists, `None` otherwise
    pub fn get_id(&self, name: &str) -> Option<LabelId> {
        self.map.get(name).map(|&pos| pos + 1)
    }

    /// Retrieves the name for a given identifier.
    ///
    /// # Returns
    /// `Some(&str)` if the identifier is valid, `None` otherwise
    pub fn get_name(&self, id: LabelId) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|pos| self.names.get(pos))
            .map(|s| s.as_str())
    }

    /// Checks if a name exists in the table.
    pub fn contains_name(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Returns the number of names currently stored.
    pub fn num_labels(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in identifier order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterates over `(id, name)` pairs in increasing identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(pos, name)| (pos + 1, name.as_str()))
    }
}

impl fmt::Display for LabelTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "LabelTable ({} labels):", self.names.len())?;
        for (id, name) in self.iter() {
            writeln!(f, "  [{}] {}", id, name)?;
        }
        Ok(())
    }
}

impl std::ops::Index<LabelId> for LabelTable {
    type Output = str;

    /// # Panics
    /// If `id` is 0 or larger than the number of labels.
    fn index(&self, id: LabelId) -> &Self::Output {
        &self.names[id - 1]
    }
}
