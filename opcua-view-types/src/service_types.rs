// SPDX-License-Identifier: MPL-2.0

//! Request and result types for the view-navigation services: `Browse`,
//! `BrowseNext` and `TranslateBrowsePathsToNodeIds`.

use crate::{
    byte_string::ByteString,
    expanded_node_id::ExpandedNodeId,
    localized_text::LocalizedText,
    node_class::{BrowseDirection, BrowseResultMask, NodeClass, NodeClassMask},
    node_id::NodeId,
    qualified_name::QualifiedName,
    status_code::StatusCode,
};

/// `remainingPathIndex` value denoting that a `BrowsePathTarget` is fully resolved.
pub const FULLY_RESOLVED: u32 = u32::MAX;

/// Describes one node to browse, and how to filter and describe its references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseDescription {
    /// The starting node.
    pub node_id: NodeId,
    /// Direction of references to return.
    pub browse_direction: BrowseDirection,
    /// Reference type to filter on. Null means "all reference types".
    pub reference_type_id: Option<NodeId>,
    /// Whether to include subtypes of `reference_type_id`.
    pub include_subtypes: bool,
    /// Node class filter. Empty/zero means "any class".
    pub node_class_mask: NodeClassMask,
    /// Which fields of the resulting `ReferenceDescription`s to populate.
    pub result_mask: BrowseResultMask,
}

impl BrowseDescription {
    /// Construct a description that returns everything reachable from `node_id`.
    pub fn unfiltered(node_id: NodeId) -> Self {
        Self {
            node_id,
            browse_direction: BrowseDirection::Both,
            reference_type_id: None,
            include_subtypes: true,
            node_class_mask: NodeClassMask::empty(),
            result_mask: BrowseResultMask::ALL,
        }
    }
}

/// One reference reported back to the client by `Browse`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceDescription {
    /// The target of the reference. Always set.
    pub node_id: ExpandedNodeId,
    /// The reference type, if `BrowseResultMask::REFERENCE_TYPE` was requested.
    pub reference_type_id: NodeId,
    /// `true` unless the reference was traversed in its inverse direction.
    pub is_forward: bool,
    /// The node class of the target, if requested.
    pub node_class: Option<NodeClass>,
    /// The browse name of the target, if requested.
    pub browse_name: QualifiedName,
    /// The display name of the target, if requested.
    pub display_name: LocalizedText,
    /// The `HasTypeDefinition` target of the target node, if requested and applicable.
    pub type_definition: ExpandedNodeId,
}

/// The outcome of browsing a single node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseResult {
    /// Result status for this element.
    pub status_code: StatusCode,
    /// Continuation point identifier, non-empty if the result was paginated.
    pub continuation_point: ByteString,
    /// References matched by the browse description, up to the requested page size.
    pub references: Vec<ReferenceDescription>,
}

impl BrowseResult {
    /// A result carrying only a status code and no references.
    pub fn from_status(status_code: StatusCode) -> Self {
        Self {
            status_code,
            continuation_point: ByteString::null(),
            references: Vec::new(),
        }
    }
}

/// One step of a relative path: a typed reference predicate plus a target browse name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePathElement {
    /// Reference type to follow. Null means "any reference type".
    pub reference_type_id: Option<NodeId>,
    /// If `true`, follow the reference in its inverse direction.
    pub is_inverse: bool,
    /// Whether to include subtypes of `reference_type_id`.
    pub include_subtypes: bool,
    /// The browse name the target of this step must have.
    pub target_name: QualifiedName,
}

/// A starting node plus a sequence of relative path elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsePath {
    /// The node the path starts from.
    pub starting_node: NodeId,
    /// The relative path to walk.
    pub relative_path: Vec<RelativePathElement>,
}

/// One resolved (or partially resolved) target of a `BrowsePath`.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowsePathTarget {
    /// The target node.
    pub target_id: ExpandedNodeId,
    /// Index of the first unresolved path element, or [`FULLY_RESOLVED`].
    pub remaining_path_index: u32,
}

impl BrowsePathTarget {
    /// Construct a fully resolved target.
    pub fn resolved(target_id: ExpandedNodeId) -> Self {
        Self {
            target_id,
            remaining_path_index: FULLY_RESOLVED,
        }
    }

    /// Returns `true` if this target is fully resolved, i.e. not a cross-server hop.
    pub fn is_fully_resolved(&self) -> bool {
        self.remaining_path_index == FULLY_RESOLVED
    }
}

/// The outcome of resolving one `BrowsePath`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowsePathResult {
    /// Result status for this path.
    pub status_code: StatusCode,
    /// Targets the path resolved to. May contain duplicates by design.
    pub targets: Vec<BrowsePathTarget>,
}

impl BrowsePathResult {
    /// A result carrying only a status code and no targets.
    pub fn from_status(status_code: StatusCode) -> Self {
        Self {
            status_code,
            targets: Vec::new(),
        }
    }
}
