//! Identifier-keyed hierarchy, the result of encoding a [Hierarchy](super::Hierarchy).

use crate::model::label_table::LabelId;
use std::collections::HashMap;

/// Mapping from parent [LabelId] to the identifiers of its children.
///
/// Entries are kept in the discovery order of the encoded hierarchy and
/// leaves are present with an empty child list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedHierarchy {
    entries: Vec<(LabelId, Vec<LabelId>)>,
    index: HashMap<LabelId, usize>,
}

impl EncodedHierarchy {
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_nodes),
            index: HashMap::with_capacity(num_nodes),
        }
    }

    /// Adds the entry of `parent`, replacing an earlier one.
    pub fn insert(&mut self, parent: LabelId, children: Vec<LabelId>) {
        if let Some(&pos) = self.index.get(&parent) {
            self.entries[pos].1 = children;
        } else {
            self.index.insert(parent, self.entries.len());
            self.entries.push((parent, children));
        }
    }

    /// Returns the children of `parent`, if it is a key.
    pub fn children(&self, parent: LabelId) -> Option<&[LabelId]> {
        self.index
            .get(&parent)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Number of keys (all nodes of the encoded hierarchy).
    pub fn num_nodes(&self) -> usize {
        self.entries.len()
    }

    pub fn num_edges(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(parent, children)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &[LabelId])> {
        self.entries.iter().map(|(p, c)| (*p, c.as_slice()))
    }

    /// Iterates over all `(parent, child)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (LabelId, LabelId)> {
        self.entries
            .iter()
            .flat_map(|(p, c)| c.iter().map(move |child| (*p, *child)))
    }
}
