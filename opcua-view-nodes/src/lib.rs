// SPDX-License-Identifier: MPL-2.0

//! Address-space node representation: `Node`, `Reference`, the `NodeStore`
//! interface the view-navigation services consume, and the `TypeTree`
//! reference-type hierarchy resolver.
#![warn(missing_docs)]

mod node;
mod node_store;
mod reference;
mod type_tree;

pub use node::Node;
pub use node_store::NodeStore;
pub use reference::Reference;
pub use type_tree::{DefaultTypeTree, TypeTree};
