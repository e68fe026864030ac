use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use feed_logging::feed_debug;

use crate::{FeedState, PostId, Vote};

/// A vote change made outside the feed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteUpdate {
    pub post_id: PostId,
    pub vote: Vote,
}

/// Single-slot mailbox for vote changes.
///
/// Clones share the slot. Publishing overwrites whatever has not been drained
/// yet, so a slow consumer only ever sees the latest vote. Draining empties
/// the slot, so an update is applied at most once.
#[derive(Debug, Clone, Default)]
pub struct VoteEventSink {
    slot: Arc<Mutex<Option<VoteUpdate>>>,
}

impl VoteEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, post_id: PostId, vote: Vote) {
        let replaced = self.lock().replace(VoteUpdate { post_id, vote });
        if let Some(previous) = replaced {
            feed_debug!(
                "vote for post {} overwritten before it was drained",
                previous.post_id
            );
        }
    }

    pub fn take(&self) -> Option<VoteUpdate> {
        self.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    /// Applies and clears the pending update, if any. Returns whether a post
    /// in `state` was patched. An update for a post outside the feed is
    /// dropped.
    pub fn drain_and_apply(&self, state: &mut FeedState) -> bool {
        let Some(update) = self.take() else {
            return false;
        };
        let applied = state.apply_vote(update);
        if !applied {
            feed_debug!("dropping vote for post {} not in feed", update.post_id);
        }
        applied
    }

    fn lock(&self) -> MutexGuard<'_, Option<VoteUpdate>> {
        // The slot holds a plain value; a panic elsewhere cannot leave it torn.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
