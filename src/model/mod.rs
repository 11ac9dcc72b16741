//! Data model for class hierarchies.
//!
//! # Representation
//! A parsed hierarchy is a [Hierarchy], which uses the arena pattern to store
//! [HierarchyNode]s in discovery order, referenced by [NodeIndex]. It is a
//! forest: several roots are allowed.
//!
//! Encoding a hierarchy yields two structures:
//!
//! | Type | Content | Persisted as |
//! |------|---------|--------------|
//! | [LabelTable] | Names in [LabelId] order (1-based) | Name table |
//! | [EncodedHierarchy] | Parent id → child ids | Edge list |
//!
//! See [crate::encoding] for how identifiers are assigned.

pub mod encoded;
pub mod hierarchy;
pub mod label_table;

pub use encoded::EncodedHierarchy;
pub use hierarchy::{Hierarchy, HierarchyNode, NodeIndex};
pub use label_table::{LabelId, LabelTable};
