// SPDX-License-Identifier: MPL-2.0

//! Numeric identifiers for the standard nodes referenced by the view-navigation
//! services. These are a small, hand-picked subset of the OPC UA namespace-zero
//! node set; the full set is produced by schema codegen and is out of scope here.

use crate::node_id::NodeId;

/// `i=84`, the root folder of the address space.
pub const ROOT_FOLDER_NODE_ID: u32 = 84;
/// `i=85`, the standard `Objects` folder under `Root`.
pub const OBJECTS_FOLDER_NODE_ID: u32 = 85;
/// `i=2253`, the `Server` object.
pub const SERVER_NODE_ID: u32 = 2253;

/// `i=31`, the root of all reference types, `References`.
pub const REFERENCES_REFERENCE_TYPE_ID: u32 = 31;
/// `i=33`, `HierarchicalReferences`.
pub const HIERARCHICAL_REFERENCES_REFERENCE_TYPE_ID: u32 = 33;
/// `i=34`, `HasChild`.
pub const HAS_CHILD_REFERENCE_TYPE_ID: u32 = 34;
/// `i=35`, `Organizes`.
pub const ORGANIZES_REFERENCE_TYPE_ID: u32 = 35;
/// `i=40`, `HasTypeDefinition`.
pub const HAS_TYPE_DEFINITION_REFERENCE_TYPE_ID: u32 = 40;
/// `i=45`, `HasSubtype`.
pub const HAS_SUBTYPE_REFERENCE_TYPE_ID: u32 = 45;

/// Builds a namespace-zero [`NodeId`] from one of the numeric constants in this module.
pub fn ns0(id: u32) -> NodeId {
    NodeId::new(0, id)
}
