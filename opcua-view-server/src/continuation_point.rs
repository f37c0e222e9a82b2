// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ContinuationPoint`.

use opcua_view_types::{BrowseDescription, ByteString};

/// A paused position within a previously started `Browse`, owned by a [`crate::Session`]
/// until it completes, is released, or the session is torn down.
#[derive(Debug, Clone)]
pub struct ContinuationPoint {
    /// Opaque 16-byte identifier, unique within the owning session.
    pub id: ByteString,
    /// Number of references already emitted for this browse description.
    pub continuation_index: u32,
    /// The browse description this continuation point resumes.
    pub description: BrowseDescription,
    /// The page size requested for this browse.
    pub max_references: u32,
}

impl ContinuationPoint {
    /// Create a new continuation point for the given description, starting fresh.
    pub fn new(
        id: ByteString,
        description: BrowseDescription,
        max_references: u32,
        continuation_index: u32,
    ) -> Self {
        Self {
            id,
            continuation_index,
            description,
            max_references,
        }
    }
}
