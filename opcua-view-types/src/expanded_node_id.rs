// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ExpandedNodeId`.

use std::fmt;

use crate::{node_id::NodeId, string::UAString};

/// A NodeId that allows the namespace URI to be specified instead of an index.
#[derive(PartialEq, Debug, Clone, Eq, Hash, Default)]
pub struct ExpandedNodeId {
    /// The inner NodeId.
    pub node_id: NodeId,
    /// The full namespace URI. If this is set, the node ID namespace index may be zero.
    pub namespace_uri: UAString,
    /// The server index. 0 means current server, nonzero marks a cross-server target.
    pub server_index: u32,
}

impl From<NodeId> for ExpandedNodeId {
    fn from(v: NodeId) -> Self {
        ExpandedNodeId {
            node_id: v,
            namespace_uri: UAString::null(),
            server_index: 0,
        }
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace_uri.is_empty() {
            write!(f, "svr={};{}", self.server_index, self.node_id)
        } else {
            let namespace_uri = String::from(self.namespace_uri.as_ref())
                .replace('%', "%25")
                .replace(';', "%3b");
            write!(
                f,
                "svr={};nsu={};{}",
                self.server_index, namespace_uri, self.node_id.identifier
            )
        }
    }
}

impl ExpandedNodeId {
    /// Creates an expanded node id from a node id.
    pub fn new<T>(value: T) -> ExpandedNodeId
    where
        T: Into<ExpandedNodeId>,
    {
        value.into()
    }

    /// Return a null ExpandedNodeId.
    pub fn null() -> ExpandedNodeId {
        Self::new(NodeId::null())
    }

    /// Return `true` if this expanded node ID is null.
    pub fn is_null(&self) -> bool {
        self.node_id.is_null()
    }

    /// Return `true` if this target lives on a different server, i.e. `server_index != 0`.
    pub fn is_cross_server(&self) -> bool {
        self.server_index != 0
    }

    /// Returns the inner [`NodeId`] if this target lives on the local server.
    pub fn node_id_if_local(&self) -> Option<NodeId> {
        if self.is_cross_server() {
            None
        } else {
            Some(self.node_id.clone())
        }
    }
}
