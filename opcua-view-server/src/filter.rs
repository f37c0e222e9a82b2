// SPDX-License-Identifier: MPL-2.0

//! Contains the reference filter and reference-description builder used by the
//! Browse Engine and the Path Resolver.

use opcua_view_nodes::{NodeStore, Reference};
use opcua_view_types::{
    BrowseDirection, BrowseResultMask, NodeClass, NodeClassMask, NodeId, ReferenceDescription,
    HAS_TYPE_DEFINITION_REFERENCE_TYPE_ID,
};

/// Decides whether a single reference on a node is visible under a browse
/// description, and if so, looks up its target.
pub struct ReferenceFilter<'a> {
    /// Direction of references to accept.
    pub direction: BrowseDirection,
    /// If set, only references whose type is structurally equal to one of these
    /// ids are accepted.
    pub relevant_types: Option<&'a [NodeId]>,
    /// Node class filter applied to the reference's target. Empty matches any class.
    pub node_class_mask: NodeClassMask,
}

impl<'a> ReferenceFilter<'a> {
    /// Returns the target node of `reference` if it passes this filter, or
    /// `None` if the reference should be skipped.
    pub fn accept<'n>(&self, reference: &Reference, store: &'n dyn NodeStore) -> Option<&'n opcua_view_nodes::Node> {
        if !self.direction.accepts(!reference.is_inverse) {
            return None;
        }
        if let Some(types) = self.relevant_types {
            if !types.iter().any(|t| t == &reference.reference_type) {
                return None;
            }
        }
        let target = store.get(&reference.target.node_id)?;
        if !self.node_class_mask.matches(target.node_class()) {
            return None;
        }
        Some(target)
    }
}

/// Populates a [`ReferenceDescription`] for `target`, reached via `reference`,
/// filling only the fields selected by `result_mask`.
pub fn build_reference_description(
    target: &opcua_view_nodes::Node,
    reference: &Reference,
    result_mask: BrowseResultMask,
) -> ReferenceDescription {
    let mut descr = ReferenceDescription {
        node_id: reference.target.clone(),
        ..Default::default()
    };

    if result_mask.contains(BrowseResultMask::REFERENCE_TYPE) {
        descr.reference_type_id = reference.reference_type.clone();
    }
    if result_mask.contains(BrowseResultMask::IS_FORWARD) {
        descr.is_forward = !reference.is_inverse;
    }
    if result_mask.contains(BrowseResultMask::NODE_CLASS) {
        descr.node_class = Some(target.node_class());
    }
    if result_mask.contains(BrowseResultMask::BROWSE_NAME) {
        descr.browse_name = target.browse_name().clone();
    }
    if result_mask.contains(BrowseResultMask::DISPLAY_NAME) {
        descr.display_name = target.display_name().clone();
    }
    if result_mask.contains(BrowseResultMask::TYPE_DEFINITION)
        && matches!(target.node_class(), NodeClass::Object | NodeClass::Variable)
    {
        if let Some(type_definition) = find_type_definition(target) {
            descr.type_definition = type_definition;
        }
    }

    descr
}

/// Scans `target`'s own references for the first forward `HasTypeDefinition` edge.
fn find_type_definition(target: &opcua_view_nodes::Node) -> Option<opcua_view_types::ExpandedNodeId> {
    let has_type_definition = NodeId::new(0, HAS_TYPE_DEFINITION_REFERENCE_TYPE_ID);
    target
        .references()
        .iter()
        .find(|r| !r.is_inverse && r.reference_type == has_type_definition)
        .map(|r| r.target.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_view_nodes::Node;
    use opcua_view_types::{ExpandedNodeId, LocalizedText, QualifiedName};

    struct FixedStore(hashbrown::HashMap<NodeId, Node>);

    impl NodeStore for FixedStore {
        fn get(&self, node_id: &NodeId) -> Option<&Node> {
            self.0.get(node_id)
        }

        fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
            Box::new(self.0.values())
        }
    }

    fn object(id: u32, name: &str) -> Node {
        Node::new(
            NodeId::new(0, id),
            NodeClass::Object,
            QualifiedName::new(0, name),
            LocalizedText::new("en", name),
        )
    }

    #[test]
    fn direction_filter_rejects_wrong_direction() {
        let mut map = hashbrown::HashMap::new();
        map.insert(NodeId::new(0, 2u32), object(2, "Target"));
        let store = FixedStore(map);

        let reference = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32));
        let forward_only = ReferenceFilter {
            direction: BrowseDirection::Inverse,
            relevant_types: None,
            node_class_mask: NodeClassMask::empty(),
        };
        assert!(forward_only.accept(&reference, &store).is_none());
    }

    #[test]
    fn missing_target_is_rejected() {
        let store = FixedStore(hashbrown::HashMap::new());
        let reference = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32));
        let filter = ReferenceFilter {
            direction: BrowseDirection::Both,
            relevant_types: None,
            node_class_mask: NodeClassMask::empty(),
        };
        assert!(filter.accept(&reference, &store).is_none());
    }

    #[test]
    fn node_class_mask_rejects_mismatched_class() {
        let mut map = hashbrown::HashMap::new();
        map.insert(NodeId::new(0, 2u32), object(2, "Target"));
        let store = FixedStore(map);
        let reference = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32));
        let filter = ReferenceFilter {
            direction: BrowseDirection::Both,
            relevant_types: None,
            node_class_mask: NodeClassMask::VARIABLE,
        };
        assert!(filter.accept(&reference, &store).is_none());
    }

    #[test]
    fn descriptor_only_sets_masked_fields() {
        let target = object(2, "Target");
        let reference = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32));
        let descr = build_reference_description(&target, &reference, BrowseResultMask::BROWSE_NAME);
        assert_eq!(descr.node_id, ExpandedNodeId::new(NodeId::new(0, 2u32)));
        assert_eq!(descr.browse_name, QualifiedName::new(0, "Target"));
        assert!(descr.display_name.is_null());
        assert!(!descr.is_forward);
        assert_eq!(descr.node_class, None);
    }

    #[test]
    fn type_definition_only_resolved_for_object_and_variable() {
        let mut target = object(2, "Target");
        let has_type_def = NodeId::new(0, HAS_TYPE_DEFINITION_REFERENCE_TYPE_ID);
        target.add_reference(Reference::new(has_type_def, NodeId::new(0, 99u32)));
        let reference = Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32));
        let descr =
            build_reference_description(&target, &reference, BrowseResultMask::TYPE_DEFINITION);
        assert_eq!(
            descr.type_definition,
            ExpandedNodeId::new(NodeId::new(0, 99u32))
        );
    }
}
