// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Reference`.

use opcua_view_types::{ExpandedNodeId, NodeId};

/// A directed, typed edge from a node to a target, stored on the source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The type of the reference, e.g. `Organizes` or `HasSubtype`.
    pub reference_type: NodeId,
    /// `true` if this reference is stored on the target in its inverse direction.
    pub is_inverse: bool,
    /// The node the reference points to.
    pub target: ExpandedNodeId,
}

impl Reference {
    /// Create a new forward reference to a node in the local server.
    pub fn new(reference_type: NodeId, target: impl Into<ExpandedNodeId>) -> Self {
        Self {
            reference_type,
            is_inverse: false,
            target: target.into(),
        }
    }

    /// Create a new inverse reference to a node in the local server.
    pub fn new_inverse(reference_type: NodeId, target: impl Into<ExpandedNodeId>) -> Self {
        Self {
            reference_type,
            is_inverse: true,
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reference_is_forward() {
        let r = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 1u32));
        assert!(!r.is_inverse);
    }

    #[test]
    fn new_inverse_reference_is_inverse() {
        let r = Reference::new_inverse(NodeId::new(0, 35u32), NodeId::new(0, 1u32));
        assert!(r.is_inverse);
    }
}
