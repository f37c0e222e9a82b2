// SPDX-License-Identifier: MPL-2.0

//! The narrow node-store interface consumed by the view-navigation services.
//! The store itself — how nodes are persisted, imported or synchronised — is
//! external to this crate; only the read surface it must expose is defined here.

use opcua_view_types::{NodeClass, NodeId};

use crate::node::Node;

/// A read-only view over the address space's nodes.
///
/// Implementations are free to back this however they like; the view-navigation
/// services only ever call `get` and, once at startup, `nodes` to build a
/// [`crate::TypeTree`].
pub trait NodeStore: Send + Sync {
    /// Look up a node by id. Returns `None` if the id is not in the store.
    fn get(&self, node_id: &NodeId) -> Option<&Node>;

    /// Iterate over every node in the store, in unspecified order.
    fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_>;

    /// Iterate over the reference-type nodes in the store.
    fn reference_type_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(
            self.nodes()
                .filter(|n| n.node_class() == NodeClass::ReferenceType),
        )
    }
}
