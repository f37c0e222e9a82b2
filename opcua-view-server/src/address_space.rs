// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `AddressSpace`, the process-wide, reader/writer
//! guarded store of [`Node`]s consulted by the view-navigation services.

use hashbrown::HashMap;
use opcua_view_nodes::{DefaultTypeTree, Node, NodeStore};
use opcua_view_types::NodeId;

use crate::sync::RwLock;
use crate::{trace_read_lock, trace_write_lock};

/// An in-memory address space.
///
/// Every public entry point on the view-navigation services acquires a read
/// guard for the full duration of the call and releases it on every exit path.
/// Nodes handed back through that guard are borrowed, read-only snapshots: no
/// field is mutated, and everything copied into a result is deep-copied first.
#[derive(Default)]
pub struct AddressSpace {
    nodes: RwLock<HashMap<NodeId, Node>>,
}

impl AddressSpace {
    /// Create a new, empty address space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node.
    pub fn insert(&self, node: Node) {
        trace_write_lock!(self.nodes).insert(node.node_id().clone(), node);
    }

    /// Acquire a read guard over the address space, valid for the duration of
    /// one service call.
    pub fn read(&self) -> AddressSpaceGuard<'_> {
        AddressSpaceGuard {
            nodes: trace_read_lock!(self.nodes),
        }
    }

    /// Build a fresh [`DefaultTypeTree`] by indexing the reference-type nodes
    /// currently in the address space.
    pub fn build_type_tree(&self) -> DefaultTypeTree {
        DefaultTypeTree::build(&self.read())
    }
}

/// A read-only snapshot of the address space, borrowed for the lifetime of a
/// single service call.
pub struct AddressSpaceGuard<'a> {
    nodes: parking_lot::RwLockReadGuard<'a, HashMap<NodeId, Node>>,
}

impl NodeStore for AddressSpaceGuard<'_> {
    fn get(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.nodes.values())
    }
}
