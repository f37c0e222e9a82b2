// SPDX-License-Identifier: MPL-2.0

//! Node classes, node-class masks, browse direction and the browse-result mask.

use bitflags::bitflags;

/// The class of a node in the address space.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeClass {
    /// An object node.
    Object = 1,
    /// A variable node.
    Variable = 2,
    /// A method node.
    Method = 4,
    /// An object type node.
    ObjectType = 8,
    /// A variable type node.
    VariableType = 16,
    /// A reference type node.
    ReferenceType = 32,
    /// A data type node.
    DataType = 64,
    /// A view node.
    View = 128,
}

impl NodeClass {
    /// The bit this node class occupies in a [`NodeClassMask`].
    pub fn as_mask(&self) -> NodeClassMask {
        NodeClassMask::from_bits_truncate(*self as u32)
    }
}

bitflags! {
    /// A mask of node classes used to filter `Browse` results.
    ///
    /// A mask of `0` is special: it is treated as "no filtering", i.e. as if
    /// every bit were set.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Hash)]
    pub struct NodeClassMask: u32 {
        /// Object nodes.
        const OBJECT = 1;
        /// Variable nodes.
        const VARIABLE = 2;
        /// Method nodes.
        const METHOD = 4;
        /// Object type nodes.
        const OBJECT_TYPE = 8;
        /// Variable type nodes.
        const VARIABLE_TYPE = 16;
        /// Reference type nodes.
        const REFERENCE_TYPE = 32;
        /// Data type nodes.
        const DATA_TYPE = 64;
        /// View nodes.
        const VIEW = 128;
    }
}

impl NodeClassMask {
    /// Returns `true` if `class` passes this mask. A mask of zero matches everything.
    pub fn matches(&self, class: NodeClass) -> bool {
        self.is_empty() || self.contains(class.as_mask())
    }
}

/// Direction of references to follow when browsing.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Default)]
pub enum BrowseDirection {
    /// Follow forward references only.
    #[default]
    Forward,
    /// Follow inverse references only.
    Inverse,
    /// Follow both forward and inverse references.
    Both,
}

impl BrowseDirection {
    /// Returns `true` if a reference with the given `is_forward` flag should be
    /// followed under this direction.
    pub fn accepts(&self, is_forward: bool) -> bool {
        match self {
            BrowseDirection::Forward => is_forward,
            BrowseDirection::Inverse => !is_forward,
            BrowseDirection::Both => true,
        }
    }
}

bitflags! {
    /// A mask of which optional fields to populate in a `ReferenceDescription`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Hash)]
    pub struct BrowseResultMask: u32 {
        /// Populate `reference_type_id`.
        const REFERENCE_TYPE = 1;
        /// Populate `is_forward`.
        const IS_FORWARD = 2;
        /// Populate `node_class`.
        const NODE_CLASS = 4;
        /// Populate `browse_name`.
        const BROWSE_NAME = 8;
        /// Populate `display_name`.
        const DISPLAY_NAME = 16;
        /// Populate `type_definition`.
        const TYPE_DEFINITION = 32;
        /// All fields.
        const ALL = Self::REFERENCE_TYPE.bits() | Self::IS_FORWARD.bits() | Self::NODE_CLASS.bits()
            | Self::BROWSE_NAME.bits() | Self::DISPLAY_NAME.bits() | Self::TYPE_DEFINITION.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_node_class_mask_matches_everything() {
        let mask = NodeClassMask::empty();
        assert!(mask.matches(NodeClass::Object));
        assert!(mask.matches(NodeClass::View));
    }

    #[test]
    fn node_class_mask_filters() {
        let mask = NodeClassMask::OBJECT | NodeClassMask::VARIABLE;
        assert!(mask.matches(NodeClass::Object));
        assert!(mask.matches(NodeClass::Variable));
        assert!(!mask.matches(NodeClass::Method));
    }

    #[test]
    fn browse_direction_accepts() {
        assert!(BrowseDirection::Forward.accepts(true));
        assert!(!BrowseDirection::Forward.accepts(false));
        assert!(BrowseDirection::Inverse.accepts(false));
        assert!(!BrowseDirection::Inverse.accepts(true));
        assert!(BrowseDirection::Both.accepts(true));
        assert!(BrowseDirection::Both.accepts(false));
    }
}
