// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Session`, the per-client continuation-point
//! bookkeeping consumed by the Browse Engine.

use opcua_view_types::ByteString;

use crate::continuation_point::ContinuationPoint;

/// Owns a session's live continuation points and tracks how many more it may
/// allocate.
///
/// The server guarantees at most one in-flight service call per session, so
/// this type does no internal locking of its own; callers serialise access.
#[derive(Debug)]
pub struct Session {
    continuation_points: Vec<ContinuationPoint>,
    quota: i64,
    initial_quota: i64,
}

impl Session {
    /// Create a new session allowed to hold at most `max_continuation_points`
    /// live continuation points at once.
    pub fn new(max_continuation_points: u32) -> Self {
        Self {
            continuation_points: Vec::new(),
            quota: max_continuation_points as i64,
            initial_quota: max_continuation_points as i64,
        }
    }

    /// Remaining number of continuation points this session may allocate.
    pub fn available(&self) -> i64 {
        self.quota
    }

    /// Number of continuation points currently live.
    pub fn live_count(&self) -> usize {
        self.continuation_points.len()
    }

    /// The quota this session was configured with.
    pub fn initial_quota(&self) -> i64 {
        self.initial_quota
    }

    /// Find the index of the continuation point with the given identifier.
    pub fn find_index(&self, id: &ByteString) -> Option<usize> {
        self.continuation_points.iter().position(|c| &c.id == id)
    }

    /// Remove and return the continuation point at `index`, without releasing
    /// its quota slot. Used when a continuation point is being resumed and may
    /// be reinserted by [`Session::reinsert`].
    pub fn take(&mut self, index: usize) -> ContinuationPoint {
        self.continuation_points.remove(index)
    }

    /// Put a continuation point taken out by [`Session::take`] back into the
    /// session's list. Does not change the quota.
    pub fn reinsert(&mut self, cp: ContinuationPoint) {
        self.continuation_points.insert(0, cp);
    }

    /// Permanently release a continuation point slot that was previously taken
    /// out and will not be reinserted. Increments the available quota.
    pub fn free(&mut self) {
        self.quota += 1;
    }

    /// Allocate a new continuation point, inserting it at the head of the
    /// session's list and decrementing the quota.
    ///
    /// Fails without modifying the session if the quota is already exhausted.
    pub fn try_insert(&mut self, cp: ContinuationPoint) -> Result<(), ()> {
        if self.quota <= 0 {
            return Err(());
        }
        self.quota -= 1;
        self.continuation_points.insert(0, cp);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_view_types::{BrowseDescription, NodeId};

    fn cp(id: u8) -> ContinuationPoint {
        ContinuationPoint::new(
            ByteString::from(vec![id]),
            BrowseDescription::unfiltered(NodeId::new(0, 1u32)),
            10,
            0,
        )
    }

    #[test]
    fn quota_conservation_across_insert_and_free() {
        let mut session = Session::new(2);
        assert_eq!(session.available() + session.live_count() as i64, 2);

        session.try_insert(cp(1)).unwrap();
        assert_eq!(session.available() + session.live_count() as i64, 2);

        session.try_insert(cp(2)).unwrap();
        assert!(session.try_insert(cp(3)).is_err());
        assert_eq!(session.available(), 0);

        let idx = session.find_index(&ByteString::from(vec![1])).unwrap();
        let taken = session.take(idx);
        session.free();
        drop(taken);
        assert_eq!(session.available() + session.live_count() as i64, 2);
    }

    #[test]
    fn reinsert_does_not_change_quota() {
        let mut session = Session::new(1);
        session.try_insert(cp(1)).unwrap();
        let idx = session.find_index(&ByteString::from(vec![1])).unwrap();
        let taken = session.take(idx);
        assert_eq!(session.live_count(), 0);
        session.reinsert(taken);
        assert_eq!(session.live_count(), 1);
        assert_eq!(session.available(), 0);
    }
}
