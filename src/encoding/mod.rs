//! Encoding of name-keyed hierarchies into numeric identifiers.
//!
//! Identifiers are assigned by a [LabelTable]:
//! 1. Initial labels (see [initial_labels]) receive `1..=k` in their given order.
//! 2. All other names receive the following identifiers in discovery order:
//!    hierarchy nodes are visited in the order they were parsed, and for each
//!    node its own name is looked up first and then the names of its children.
//!
//! Initial labels that do not occur in the hierarchy keep their identifier
//! but have no edges.

pub mod initial_labels;

use crate::model::{EncodedHierarchy, Hierarchy, LabelTable};
use log::debug;

/// Encodes a hierarchy, keeping the identifiers of the given initial labels.
///
/// # Arguments
/// * `hierarchy` - Parsed hierarchy
/// * `initial_labels` - Names whose identifiers are fixed to `1..=k` in order
///
/// # Returns
/// The [EncodedHierarchy] and the [LabelTable] mapping identifiers to names.
///
/// # Example
/// ```
/// use class_hierarchy::encoding::encode;
/// use class_hierarchy::indented::parse_str;
///
/// let hierarchy = parse_str("Root\n- Child1\n- Child2\n  - Grandchild1")?;
/// let (encoded, labels) = encode(&hierarchy, ["Grandchild1"]);
///
/// assert_eq!(labels.get_id("Grandchild1"), Some(1));
/// assert_eq!(labels.get_id("Root"), Some(2));
/// assert_eq!(encoded.children(4), Some(&[1][..]));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode<I, S>(hierarchy: &Hierarchy, initial_labels: I) -> (EncodedHierarchy, LabelTable)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut labels = LabelTable::with_initial_labels(initial_labels);
    let num_seeded = labels.num_labels();
    let mut encoded = EncodedHierarchy::with_capacity(hierarchy.num_nodes());

    for node in hierarchy.iter() {
        let parent_id = labels.get_or_insert(node.name());
        let child_ids = node
            .children()
            .iter()
            .map(|&child| labels.get_or_insert(hierarchy.node(child).name()))
            .collect();
        encoded.insert(parent_id, child_ids);
    }

    debug!(
        "Encoded {} nodes into {} labels ({} initial)",
        encoded.num_nodes(),
        labels.num_labels(),
        num_seeded
    );
    (encoded, labels)
}
