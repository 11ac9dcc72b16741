//! Name-keyed hierarchy (forest) as produced by the indented parser.

use std::collections::HashMap;
use std::fmt;

/// Index of a node in the [Hierarchy] arena, in discovery order.
pub type NodeIndex = usize;

// =#========================================================================#=
// HIERARCHY NODE
// =#========================================================================#=
/// A named node of a [Hierarchy] together with its children.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    name: String,
    children: Vec<NodeIndex>,
}

impl HierarchyNode {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Returns the name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arena indices of the children of this node.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// =#========================================================================#=
// HIERARCHY
// =#========================================================================#=
/// Mapping from node names to the set of their children's names.
///
/// Uses the arena pattern: nodes are stored in a vector in the order they were
/// registered (discovery order) and refer to each other by [NodeIndex].
/// Every node is a key, including leaves, and may have at most one parent.
/// Several roots are allowed, so a [Hierarchy] is a forest.
///
/// # Example
/// ```
/// use class_hierarchy::model::Hierarchy;
///
/// let mut hierarchy = Hierarchy::new();
/// let birds = hierarchy.insert("Birds").unwrap();
/// let gulls = hierarchy.insert("Gulls").unwrap();
/// hierarchy.add_child(birds, gulls);
///
/// assert_eq!(hierarchy.num_nodes(), 2);
/// assert_eq!(hierarchy.child_names("Birds").unwrap(), vec!["Gulls"]);
/// assert!(hierarchy.insert("Gulls").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
    index: HashMap<String, NodeIndex>,
    has_parent: Vec<bool>,
}

impl Hierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hierarchy with room for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            index: HashMap::with_capacity(num_nodes),
            has_parent: Vec::with_capacity(num_nodes),
        }
    }

    /// Registers a new node without children.
    ///
    /// # Returns
    /// * `Some(index)` of the new node
    /// * `None` if a node with this name already exists (nothing is changed)
    pub fn insert(&mut self, name: &str) -> Option<NodeIndex> {
        if self.index.contains_key(name) {
            return None;
        }
        let idx = self.nodes.len();
        self.nodes.push(HierarchyNode::new(name.to_string()));
        self.index.insert(name.to_string(), idx);
        self.has_parent.push(false);
        Some(idx)
    }

    /// Adds `child` to the children of `parent`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        debug_assert_ne!(parent, child, "self-loop in hierarchy");
        debug_assert!(!self.has_parent[child], "node has two parents");
        self.nodes[parent].children.push(child);
        self.has_parent[child] = true;
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of parent-child pairs.
    pub fn num_edges(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }

    /// Returns whether no node was registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks whether a node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the arena index of the node with the given name.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Returns the node at the given arena index.
    pub fn node(&self, index: NodeIndex) -> &HierarchyNode {
        &self.nodes[index]
    }

    /// Returns the node with the given name.
    pub fn get(&self, name: &str) -> Option<&HierarchyNode> {
        self.index_of(name).map(|i| &self.nodes[i])
    }

    /// Returns the names of the children of the named node, in insertion order.
    pub fn child_names(&self, name: &str) -> Option<Vec<&str>> {
        self.get(name).map(|node| {
            node.children
                .iter()
                .map(|&c| self.nodes[c].name.as_str())
                .collect()
        })
    }

    /// Iterates over all nodes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter()
    }

    /// Iterates over all names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Iterates over all nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes
            .iter()
            .zip(&self.has_parent)
            .filter(|(_, has_parent)| !**has_parent)
            .map(|(node, _)| node)
    }

    /// Iterates over all nodes without children.
    pub fn leaves(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Iterates over all parent-child pairs as names.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(move |parent| {
            parent
                .children
                .iter()
                .map(move |&c| (parent.name.as_str(), self.nodes[c].name.as_str()))
        })
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Hierarchy ({} nodes, {} edges):",
            self.num_nodes(),
            self.num_edges()
        )?;
        for node in &self.nodes {
            let children: Vec<&str> = node
                .children
                .iter()
                .map(|&c| self.nodes[c].name.as_str())
                .collect();
            writeln!(f, "  {} -> {{{}}}", node.name, children.join(", "))?;
        }
        Ok(())
    }
}
