// SPDX-License-Identifier: MPL-2.0

//! Top-level entry points for the three view-navigation services: `Browse`,
//! `BrowseNext` and `TranslateBrowsePathsToNodeIds`.

use opcua_view_types::{
    BrowseDescription, BrowsePath, BrowsePathResult, BrowseResult, ByteString, NodeId, StatusCode,
};

use crate::address_space::AddressSpace;
use crate::browse::BrowseEngine;
use crate::path_resolver::PathResolver;
use crate::session::Session;

/// Default continuation-point quota given to the throwaway session used by the
/// single-path convenience entry points.
const ADMINISTRATIVE_SESSION_QUOTA: u32 = 1;

/// Dispatches the view-navigation services against one [`AddressSpace`].
///
/// Builds a fresh [`opcua_view_nodes::DefaultTypeTree`] from the address space
/// on every call; callers issuing many requests in a row should prefer the
/// batch entry points (`browse`, `browse_next`, `translate_browse_paths_to_node_ids`)
/// over the single-path convenience wrappers to amortise that cost across a request.
pub struct ViewService {
    address_space: AddressSpace,
}

impl ViewService {
    /// Create a new service over the given address space.
    pub fn new(address_space: AddressSpace) -> Self {
        Self { address_space }
    }

    /// The address space this service dispatches against.
    pub fn address_space(&self) -> &AddressSpace {
        &self.address_space
    }

    /// `Browse`: start browsing every node in `nodes_to_browse`.
    ///
    /// Fails the whole request with `BadViewIdUnknown` if `view_id` names a
    /// non-null view, or `BadNothingToDo` if `nodes_to_browse` is empty.
    pub fn browse(
        &self,
        session: &mut Session,
        view_id: Option<&NodeId>,
        nodes_to_browse: &[BrowseDescription],
        requested_max_references_per_node: u32,
    ) -> Result<Vec<BrowseResult>, StatusCode> {
        let guard = self.address_space.read();
        let types = self.address_space.build_type_tree();
        let engine = BrowseEngine::new(&guard, &types);
        engine.browse(
            session,
            view_id,
            nodes_to_browse,
            requested_max_references_per_node,
        )
    }

    /// `BrowseNext`: resume or release previously issued continuation points.
    ///
    /// Fails the whole request with `BadNothingToDo` if `continuation_point_ids`
    /// is empty.
    pub fn browse_next(
        &self,
        session: &mut Session,
        release_continuation_points: bool,
        continuation_point_ids: &[ByteString],
    ) -> Result<Vec<BrowseResult>, StatusCode> {
        let guard = self.address_space.read();
        let types = self.address_space.build_type_tree();
        let engine = BrowseEngine::new(&guard, &types);
        engine.browse_next(session, release_continuation_points, continuation_point_ids)
    }

    /// `TranslateBrowsePathsToNodeIds`: resolve every relative path in `browse_paths`.
    ///
    /// Fails the whole request with `BadNothingToDo` if `browse_paths` is empty.
    pub fn translate_browse_paths_to_node_ids(
        &self,
        browse_paths: &[BrowsePath],
    ) -> Result<Vec<BrowsePathResult>, StatusCode> {
        if browse_paths.is_empty() {
            return Err(StatusCode::BadNothingToDo);
        }
        let guard = self.address_space.read();
        let types = self.address_space.build_type_tree();
        let resolver = PathResolver::new(&guard, &types);
        Ok(resolver.translate_all(browse_paths))
    }

    /// Browse a single node to completion of its first page, using a throwaway
    /// session scoped to this call. Convenient for callers that don't want to
    /// manage continuation points themselves; if the result doesn't fit in one
    /// page the continuation point is silently discarded along with the session.
    pub fn browse_one(
        &self,
        description: BrowseDescription,
        requested_max_references_per_node: u32,
    ) -> BrowseResult {
        let mut session = Session::new(ADMINISTRATIVE_SESSION_QUOTA);
        match self.browse(
            &mut session,
            None,
            std::slice::from_ref(&description),
            requested_max_references_per_node,
        ) {
            Ok(mut results) => results.remove(0),
            Err(status) => BrowseResult::from_status(status),
        }
    }

    /// Resolve a single relative path. Needs no session, since path resolution
    /// never allocates continuation points.
    pub fn translate_browse_path(&self, path: BrowsePath) -> BrowsePathResult {
        match self.translate_browse_paths_to_node_ids(std::slice::from_ref(&path)) {
            Ok(mut results) => results.remove(0),
            Err(status) => BrowsePathResult::from_status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_view_nodes::{Node, Reference};
    use opcua_view_types::{LocalizedText, NodeClass, QualifiedName};

    fn service_with_chain() -> ViewService {
        let space = AddressSpace::new();
        let mut root = Node::new(
            NodeId::new(0, 1u32),
            NodeClass::Object,
            QualifiedName::new(0, "Root"),
            LocalizedText::new("en", "Root"),
        );
        root.add_reference(Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32)));
        space.insert(root);
        space.insert(Node::new(
            NodeId::new(0, 2u32),
            NodeClass::Object,
            QualifiedName::new(0, "Child"),
            LocalizedText::new("en", "Child"),
        ));
        ViewService::new(space)
    }

    fn service_with_two_children() -> ViewService {
        let space = AddressSpace::new();
        let mut root = Node::new(
            NodeId::new(0, 1u32),
            NodeClass::Object,
            QualifiedName::new(0, "Root"),
            LocalizedText::new("en", "Root"),
        );
        root.add_reference(Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 2u32)));
        root.add_reference(Reference::new(NodeId::new(0, 35u32), NodeId::new(0, 3u32)));
        space.insert(root);
        for id in [2u32, 3u32] {
            space.insert(Node::new(
                NodeId::new(0, id),
                NodeClass::Object,
                QualifiedName::new(0, "Child"),
                LocalizedText::new("en", "Child"),
            ));
        }
        ViewService::new(space)
    }

    #[test]
    fn browse_one_returns_references() {
        let service = service_with_chain();
        let result = service.browse_one(BrowseDescription::unfiltered(NodeId::new(0, 1u32)), 10);
        assert_eq!(result.status_code, StatusCode::Good);
        assert_eq!(result.references.len(), 1);
    }

    #[test]
    fn browse_rejects_non_null_view_and_empty_input() {
        let service = service_with_chain();
        let mut session = Session::new(4);
        assert_eq!(
            service
                .browse(&mut session, Some(&NodeId::new(0, 7u32)), &[], 0)
                .unwrap_err(),
            StatusCode::BadViewIdUnknown
        );
        assert_eq!(
            service.browse(&mut session, None, &[], 0).unwrap_err(),
            StatusCode::BadNothingToDo
        );
    }

    #[test]
    fn translate_browse_path_resolves() {
        let service = service_with_chain();
        let path = BrowsePath {
            starting_node: NodeId::new(0, 1u32),
            relative_path: vec![opcua_view_types::RelativePathElement {
                reference_type_id: Some(NodeId::new(0, 35u32)),
                is_inverse: false,
                include_subtypes: true,
                target_name: QualifiedName::new(0, "Child"),
            }],
        };
        let result = service.translate_browse_path(path);
        assert_eq!(result.status_code, StatusCode::Good);
        assert_eq!(result.targets.len(), 1);
    }

    #[test]
    fn translate_browse_paths_rejects_empty_input() {
        let service = service_with_chain();
        let err = service
            .translate_browse_paths_to_node_ids(&[])
            .unwrap_err();
        assert_eq!(err, StatusCode::BadNothingToDo);
    }

    #[test]
    fn browse_next_resumes_across_calls() {
        let service = service_with_two_children();
        let mut session = Session::new(4);
        let results = service
            .browse(
                &mut session,
                None,
                &[BrowseDescription::unfiltered(NodeId::new(0, 1u32))],
                1,
            )
            .unwrap();
        assert_eq!(results[0].references.len(), 1);
        assert!(!results[0].continuation_point.is_null());

        let next = service
            .browse_next(
                &mut session,
                false,
                std::slice::from_ref(&results[0].continuation_point),
            )
            .unwrap();
        assert_eq!(next[0].status_code, StatusCode::Good);
        assert_eq!(next[0].references.len(), 1);
        assert!(next[0].continuation_point.is_null());
    }
}
