// SPDX-License-Identifier: MPL-2.0

//! Contains the `TypeTree` trait and its default implementation, which together
//! form the reference-type hierarchy resolver consulted by `Browse` and
//! `TranslateBrowsePathsToNodeIds`.

use hashbrown::{HashMap, HashSet};
use opcua_view_types::{NodeId, HAS_SUBTYPE_REFERENCE_TYPE_ID};

use crate::node_store::NodeStore;

/// Resolves the subtype closure of reference-type ids.
///
/// An implementation is expected to have pre-indexed the `HasSubtype` hierarchy
/// of the reference types known to the address space; `resolve` itself never
/// touches the node store.
pub trait TypeTree: Send + Sync {
    /// Returns `true` if `id` names a known reference-type node.
    fn is_reference_type(&self, id: &NodeId) -> bool;

    /// Returns the ids of the immediate subtypes of `id`.
    fn subtypes_of(&self, id: &NodeId) -> &[NodeId];

    /// Resolves `root` into the set of reference-type ids a filter should match
    /// against: just `{root}` if `include_subtypes` is `false`, otherwise the
    /// closure of `root` under the subtype relation.
    fn resolve(&self, root: &NodeId, include_subtypes: bool) -> Vec<NodeId> {
        if !include_subtypes {
            return vec![root.clone()];
        }
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(root.clone());
        seen.insert(root.clone());
        while let Some(next) = queue.pop_front() {
            for child in self.subtypes_of(&next) {
                if seen.insert(child.clone()) {
                    queue.push_back(child.clone());
                }
            }
            out.push(next);
        }
        out
    }
}

/// A `TypeTree` built by indexing every `HasSubtype` reference found on the
/// reference-type nodes of a node store.
#[derive(Debug, Default)]
pub struct DefaultTypeTree {
    reference_types: HashSet<NodeId>,
    subtypes: HashMap<NodeId, Vec<NodeId>>,
}

impl DefaultTypeTree {
    /// Create an empty type tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the reference-type nodes of `store` into this type tree, walking
    /// their `HasSubtype` edges.
    pub fn build(store: &dyn NodeStore) -> Self {
        let mut tree = Self::new();
        for node in store.reference_type_nodes() {
            tree.reference_types.insert(node.node_id().clone());
        }
        for node in store.reference_type_nodes() {
            let has_subtype = NodeId::new(0, HAS_SUBTYPE_REFERENCE_TYPE_ID);
            for reference in node.references() {
                if reference.is_inverse || reference.reference_type != has_subtype {
                    continue;
                }
                if let Some(target) = reference.target.node_id_if_local() {
                    tree.subtypes
                        .entry(node.node_id().clone())
                        .or_default()
                        .push(target);
                }
            }
        }
        log::debug!(
            "Indexed {} reference types into the type tree",
            tree.reference_types.len()
        );
        tree
    }
}

impl TypeTree for DefaultTypeTree {
    fn is_reference_type(&self, id: &NodeId) -> bool {
        self.reference_types.contains(id)
    }

    fn subtypes_of(&self, id: &NodeId) -> &[NodeId] {
        self.subtypes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
