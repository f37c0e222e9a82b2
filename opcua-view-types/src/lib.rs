// SPDX-License-Identifier: MPL-2.0

//! Core value types for the view-navigation services: node and path identifiers,
//! node classes and masks, and the `Browse`/`BrowseNext`/`TranslateBrowsePathsToNodeIds`
//! request and result types.
#![warn(missing_docs)]

mod byte_string;
mod expanded_node_id;
mod guid;
mod localized_text;
mod node_class;
mod node_id;
mod qualified_name;
mod service_types;
mod status_code;
mod string;
mod well_known;

pub use byte_string::ByteString;
pub use expanded_node_id::ExpandedNodeId;
pub use guid::Guid;
pub use localized_text::LocalizedText;
pub use node_class::{BrowseDirection, BrowseResultMask, NodeClass, NodeClassMask};
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use service_types::{
    BrowseDescription, BrowsePath, BrowsePathResult, BrowsePathTarget, BrowseResult,
    ReferenceDescription, RelativePathElement, FULLY_RESOLVED,
};
pub use status_code::StatusCode;
pub use string::UAString;
pub use well_known::{
    ns0, HAS_CHILD_REFERENCE_TYPE_ID, HAS_SUBTYPE_REFERENCE_TYPE_ID,
    HAS_TYPE_DEFINITION_REFERENCE_TYPE_ID, HIERARCHICAL_REFERENCES_REFERENCE_TYPE_ID,
    OBJECTS_FOLDER_NODE_ID, ORGANIZES_REFERENCE_TYPE_ID, REFERENCES_REFERENCE_TYPE_ID,
    ROOT_FOLDER_NODE_ID, SERVER_NODE_ID,
};
