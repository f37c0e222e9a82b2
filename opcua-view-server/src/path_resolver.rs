// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of the Path Resolver, `TranslateBrowsePathsToNodeIds`'s
//! relative-path walk over the address space.

use opcua_view_nodes::{NodeStore, TypeTree};
use opcua_view_types::{
    BrowsePath, BrowsePathResult, BrowsePathTarget, ExpandedNodeId, NodeId, QualifiedName,
    StatusCode,
};

/// Walks a [`BrowsePath`]'s relative path one element at a time, expanding a
/// frontier of candidate node ids at each step.
pub struct PathResolver<'a> {
    store: &'a dyn NodeStore,
    types: &'a dyn TypeTree,
}

impl<'a> PathResolver<'a> {
    /// Create a new resolver over the given node store and reference-type tree.
    pub fn new(store: &'a dyn NodeStore, types: &'a dyn TypeTree) -> Self {
        Self { store, types }
    }

    /// Resolve `path` to the set of nodes it names.
    pub fn translate(&self, path: &BrowsePath) -> BrowsePathResult {
        if path.relative_path.is_empty() {
            return BrowsePathResult::from_status(StatusCode::BadNothingToDo);
        }
        if path
            .relative_path
            .iter()
            .any(|elem| elem.target_name.name.is_empty())
        {
            return BrowsePathResult::from_status(StatusCode::BadBrowseNameInvalid);
        }

        let mut current = vec![path.starting_node.clone()];
        let mut prev_target_name: Option<QualifiedName> = None;
        let mut targets: Vec<BrowsePathTarget> = Vec::new();

        for (i, elem) in path.relative_path.iter().enumerate() {
            let relevant_types = elem.reference_type_id.as_ref().map(|id| {
                if self.types.is_reference_type(id) {
                    self.types.resolve(id, elem.include_subtypes)
                } else {
                    Vec::new()
                }
            });

            let mut next = Vec::new();
            for candidate in &current {
                let Some(node) = self.store.get(candidate) else {
                    if i == 0 {
                        return BrowsePathResult::from_status(StatusCode::BadNodeIdUnknown);
                    }
                    continue;
                };
                if let Some(expected) = &prev_target_name {
                    if node.browse_name() != expected {
                        continue;
                    }
                }
                for reference in node.references() {
                    if reference.is_inverse != elem.is_inverse {
                        continue;
                    }
                    if let Some(types) = &relevant_types {
                        if !types.iter().any(|t| t == &reference.reference_type) {
                            continue;
                        }
                    }
                    if reference.target.is_cross_server() {
                        targets.push(BrowsePathTarget {
                            target_id: reference.target.clone(),
                            remaining_path_index: i as u32,
                        });
                    } else if let Some(id) = reference.target.node_id_if_local() {
                        next.push(id);
                    }
                }
            }

            if next.is_empty() {
                current = Vec::new();
                break;
            }
            current = next;
            prev_target_name = Some(elem.target_name.clone());
        }

        for candidate in current {
            let Some(node) = self.store.get(&candidate) else {
                continue;
            };
            if let Some(expected) = &prev_target_name {
                if node.browse_name() != expected {
                    continue;
                }
            }
            targets.push(BrowsePathTarget::resolved(ExpandedNodeId::new(candidate)));
        }

        if targets.is_empty() {
            BrowsePathResult::from_status(StatusCode::BadNoMatch)
        } else {
            BrowsePathResult {
                status_code: StatusCode::Good,
                targets,
            }
        }
    }

    /// Resolve every path in `paths`, in order.
    pub fn translate_all(&self, paths: &[BrowsePath]) -> Vec<BrowsePathResult> {
        paths.iter().map(|p| self.translate(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_view_nodes::{DefaultTypeTree, Node, Reference};
    use opcua_view_types::{LocalizedText, NodeClass, RelativePathElement};

    struct FixedStore(hashbrown::HashMap<NodeId, Node>);

    impl NodeStore for FixedStore {
        fn get(&self, node_id: &NodeId) -> Option<&Node> {
            self.0.get(node_id)
        }

        fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
            Box::new(self.0.values())
        }
    }

    fn node(id: u32, name: &str) -> Node {
        Node::new(
            NodeId::new(0, id),
            NodeClass::Object,
            QualifiedName::new(0, name),
            LocalizedText::new("en", name),
        )
    }

    fn organizes() -> NodeId {
        NodeId::new(0, 35u32)
    }

    fn step(name: &str) -> RelativePathElement {
        RelativePathElement {
            reference_type_id: Some(organizes()),
            is_inverse: false,
            include_subtypes: true,
            target_name: QualifiedName::new(0, name),
        }
    }

    fn two_level_store() -> FixedStore {
        let mut map = hashbrown::HashMap::new();
        let mut root = node(1, "Root");
        root.add_reference(Reference::new(organizes(), NodeId::new(0, 2u32)));
        map.insert(NodeId::new(0, 1u32), root);

        let mut child = node(2, "Child");
        child.add_reference(Reference::new(organizes(), NodeId::new(0, 3u32)));
        map.insert(NodeId::new(0, 2u32), child);

        map.insert(NodeId::new(0, 3u32), node(3, "Grandchild"));
        FixedStore(map)
    }

    #[test]
    fn resolves_two_step_path() {
        let store = two_level_store();
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: vec![step("Child"), step("Grandchild")],
        };
        let result = resolver.translate(&path);
        assert_eq!(result.status_code, StatusCode::Good);
        assert_eq!(result.targets.len(), 1);
        assert!(result.targets[0].is_fully_resolved());
        assert_eq!(
            result.targets[0].target_id,
            ExpandedNodeId::new(NodeId::new(0, 3u32))
        );
    }

    #[test]
    fn wrong_browse_name_yields_no_match() {
        let store = two_level_store();
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: vec![step("NoSuchChild")],
        };
        let result = resolver.translate(&path);
        assert_eq!(result.status_code, StatusCode::BadNoMatch);
        assert!(result.targets.is_empty());
    }

    #[test]
    fn unknown_starting_node_is_bad_node_id_unknown() {
        let store = two_level_store();
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 999u32),
            relative_path: vec![step("Child")],
        };
        let result = resolver.translate(&path);
        assert_eq!(result.status_code, StatusCode::BadNodeIdUnknown);
    }

    #[test]
    fn empty_relative_path_is_nothing_to_do() {
        let store = two_level_store();
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: Vec::new(),
        };
        let result = resolver.translate(&path);
        assert_eq!(result.status_code, StatusCode::BadNothingToDo);
    }

    #[test]
    fn null_target_name_is_bad_browse_name_invalid() {
        let store = two_level_store();
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: vec![RelativePathElement {
                reference_type_id: None,
                is_inverse: false,
                include_subtypes: true,
                target_name: QualifiedName::null(),
            }],
        };
        let result = resolver.translate(&path);
        assert_eq!(result.status_code, StatusCode::BadBrowseNameInvalid);
    }

    #[test]
    fn duplicate_references_produce_duplicate_targets() {
        let mut map = hashbrown::HashMap::new();
        let mut root = node(1, "Root");
        root.add_reference(Reference::new(organizes(), NodeId::new(0, 2u32)));
        root.add_reference(Reference::new(organizes(), NodeId::new(0, 2u32)));
        map.insert(NodeId::new(0, 1u32), root);
        map.insert(NodeId::new(0, 2u32), node(2, "Child"));
        let store = FixedStore(map);
        let types = DefaultTypeTree::new();
        let resolver = PathResolver::new(&store, &types);
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: vec![step("Child")],
        };
        let result = resolver.translate(&path);
        assert_eq!(result.targets.len(), 2);
    }
}
