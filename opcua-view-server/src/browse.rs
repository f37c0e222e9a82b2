// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of the Browse Engine: `browse`, `browse_next`
//! and the shared `browse_single` entry point they both dispatch through.

use opcua_view_crypto::random;
use opcua_view_nodes::{NodeStore, TypeTree};
use opcua_view_types::{
    BrowseDescription, BrowseResult, ByteString, NodeId, ReferenceDescription, StatusCode,
};

use crate::continuation_point::ContinuationPoint;
use crate::filter::{build_reference_description, ReferenceFilter};
use crate::session::Session;

/// Traverses address-space nodes' references on behalf of `Browse` and
/// `BrowseNext`, honouring pagination via continuation points held on the
/// session.
pub struct BrowseEngine<'a> {
    store: &'a dyn NodeStore,
    types: &'a dyn TypeTree,
}

impl<'a> BrowseEngine<'a> {
    /// Create a new engine over the given node store and reference-type tree.
    /// Both must be held for the full duration of the service call.
    pub fn new(store: &'a dyn NodeStore, types: &'a dyn TypeTree) -> Self {
        Self { store, types }
    }

    /// Resolve a single node, either starting a fresh browse from `description`
    /// or resuming from `continuation`. Exactly one of the two must be `Some`.
    pub fn browse_single(
        &self,
        session: &mut Session,
        continuation: Option<ContinuationPoint>,
        description: Option<BrowseDescription>,
        max_references: u32,
    ) -> BrowseResult {
        let (description, max_references, continuation_index) = match &continuation {
            Some(cp) => (cp.description.clone(), cp.max_references, cp.continuation_index),
            None => match description {
                Some(d) => (d, max_references, 0),
                None => return BrowseResult::from_status(StatusCode::BadNodeIdUnknown),
            },
        };

        let relevant_types = match resolve_reference_types(
            self.types,
            description.reference_type_id.as_ref(),
            description.include_subtypes,
        ) {
            Ok(types) => types,
            Err(status) => return BrowseResult::from_status(status),
        };

        let node = match self.store.get(&description.node_id) {
            Some(node) => node,
            None => return BrowseResult::from_status(StatusCode::BadNodeIdUnknown),
        };

        let refs = node.references();
        if refs.is_empty() {
            return BrowseResult::from_status(StatusCode::Good);
        }

        let total = refs.len() as u32;
        let maxrefs = if max_references == 0 {
            total
        } else {
            max_references.min(total)
        };

        let filter = ReferenceFilter {
            direction: description.browse_direction,
            relevant_types: relevant_types.as_deref(),
            node_class_mask: description.node_class_mask,
        };

        let mut descriptors: Vec<ReferenceDescription> = Vec::with_capacity(maxrefs as usize);
        let mut skipped = 0u32;
        let mut emitted = 0u32;
        let mut i = 0usize;
        while i < refs.len() {
            let reference = &refs[i];
            i += 1;

            let Some(target) = filter.accept(reference, self.store) else {
                continue;
            };
            if skipped < continuation_index {
                skipped += 1;
                continue;
            }

            descriptors.push(build_reference_description(
                target,
                reference,
                description.result_mask,
            ));
            emitted += 1;
            if emitted == maxrefs {
                break;
            }
        }

        let done = i == refs.len();

        let mut result = BrowseResult {
            status_code: StatusCode::Good,
            continuation_point: ByteString::null(),
            references: descriptors,
        };

        match continuation {
            Some(mut cp) => {
                cp.continuation_index += emitted;
                if done {
                    session.free();
                } else {
                    let id = cp.id.clone();
                    session.reinsert(cp);
                    result.continuation_point = id;
                }
            }
            None if !done => {
                let cp = ContinuationPoint::new(
                    random::continuation_point_id(),
                    description,
                    max_references,
                    emitted,
                );
                match session.try_insert(cp.clone()) {
                    Ok(()) => result.continuation_point = cp.id,
                    Err(()) => return BrowseResult::from_status(StatusCode::BadNoContinuationPoints),
                }
            }
            None => {}
        }

        result
    }

    /// Dispatch `Browse` over every element of `nodes_to_browse`, isolating
    /// per-element failures in their own result.
    ///
    /// Returns `None` (a request-wide failure) if `view_id` names a non-null
    /// view, or if `nodes_to_browse` is empty.
    pub fn browse(
        &self,
        session: &mut Session,
        view_id: Option<&NodeId>,
        nodes_to_browse: &[BrowseDescription],
        requested_max_references_per_node: u32,
    ) -> Result<Vec<BrowseResult>, StatusCode> {
        if view_id.is_some_and(|id| !id.is_null()) {
            return Err(StatusCode::BadViewIdUnknown);
        }
        if nodes_to_browse.is_empty() {
            return Err(StatusCode::BadNothingToDo);
        }

        Ok(nodes_to_browse
            .iter()
            .map(|descr| {
                self.browse_single(
                    session,
                    None,
                    Some(descr.clone()),
                    requested_max_references_per_node,
                )
            })
            .collect())
    }

    /// Dispatch `BrowseNext` over every continuation point identifier.
    ///
    /// Returns `None` (a request-wide failure) if `continuation_points` is empty.
    pub fn browse_next(
        &self,
        session: &mut Session,
        release_continuation_points: bool,
        continuation_points: &[ByteString],
    ) -> Result<Vec<BrowseResult>, StatusCode> {
        if continuation_points.is_empty() {
            return Err(StatusCode::BadNothingToDo);
        }

        Ok(continuation_points
            .iter()
            .map(|id| {
                let Some(index) = session.find_index(id) else {
                    return BrowseResult::from_status(StatusCode::BadContinuationPointInvalid);
                };
                let cp = session.take(index);
                if release_continuation_points {
                    session.free();
                    return BrowseResult::from_status(StatusCode::Good);
                }
                self.browse_single(session, Some(cp), None, 0)
            })
            .collect())
    }
}

/// Resolves the relevant reference-type set for a browse description:
/// `None` means "all reference types", `Some(_)` is the subtype closure (or
/// singleton) of the requested type.
fn resolve_reference_types(
    types: &dyn TypeTree,
    reference_type_id: Option<&NodeId>,
    include_subtypes: bool,
) -> Result<Option<Vec<NodeId>>, StatusCode> {
    let Some(id) = reference_type_id else {
        return Ok(None);
    };
    if id.is_null() {
        return Ok(None);
    }
    if !types.is_reference_type(id) {
        return Err(StatusCode::BadReferenceTypeIdInvalid);
    }
    Ok(Some(types.resolve(id, include_subtypes)))
}
