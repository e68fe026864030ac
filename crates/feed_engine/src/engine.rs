use std::sync::Arc;

use feed_core::{
    update, Effect, FeedSettings, FeedSnapshot, FeedState, FetchRequest, ListingFilter, Msg, Page,
    RequestTag, VoteEventSink,
};
use feed_logging::feed_info;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::watch;

use crate::{FetchError, ListingFetcher};

type Completion = (RequestTag, Result<Page, FetchError>);

/// Drives one feed: turns commands into fetches and fetch results back into
/// state, on the caller's task.
///
/// Commands return immediately; fetches run when the caller awaits
/// [`process_next`](Self::process_next) or
/// [`run_until_idle`](Self::run_until_idle). Results that arrive for a
/// superseded request are dropped by the state machine.
pub struct FeedEngine<F: ListingFetcher + ?Sized + 'static> {
    state: FeedState,
    fetcher: Arc<F>,
    votes: VoteEventSink,
    pending: FuturesUnordered<BoxFuture<'static, Completion>>,
    snapshot_tx: watch::Sender<FeedSnapshot>,
}

impl<F: ListingFetcher + ?Sized + 'static> FeedEngine<F> {
    pub fn new(
        fetcher: Arc<F>,
        filter: ListingFilter,
        settings: FeedSettings,
        votes: VoteEventSink,
    ) -> Self {
        let state = FeedState::new(filter, settings);
        let (snapshot_tx, _) = watch::channel(state.view());
        Self {
            state,
            fetcher,
            votes,
            pending: FuturesUnordered::new(),
            snapshot_tx,
        }
    }

    pub fn set_filter(&mut self, filter: ListingFilter) {
        self.dispatch(Msg::FilterChanged(filter));
    }

    pub fn load_more(&mut self) {
        self.dispatch(Msg::LoadMoreRequested);
    }

    pub fn refresh(&mut self) {
        self.dispatch(Msg::RefreshRequested);
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state.view()
    }

    /// Receiver that is updated whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Handle other screens publish votes into.
    pub fn votes(&self) -> &VoteEventSink {
        &self.votes
    }

    /// Fetches issued but not yet processed, stale ones included.
    pub fn pending_fetches(&self) -> usize {
        self.pending.len()
    }

    /// Applies a pending vote update without waiting for the next command.
    pub fn drain_votes(&mut self) -> bool {
        let applied = self.votes.drain_and_apply(&mut self.state);
        self.publish();
        applied
    }

    /// Waits for the next fetch to finish and applies it. Returns false when
    /// nothing is pending.
    pub async fn process_next(&mut self) -> bool {
        let Some((request, result)) = self.pending.next().await else {
            return false;
        };
        self.dispatch(Msg::PageLoaded {
            request,
            result: result.map_err(|err| err.kind),
        });
        true
    }

    pub async fn run_until_idle(&mut self) {
        while self.process_next().await {}
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
        self.votes.drain_and_apply(&mut self.state);
        self.publish();
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchPage(FetchRequest { tag, page_size }) => {
                feed_info!(
                    "FetchPage generation={} filter={} page={} mode={:?}",
                    tag.generation,
                    tag.filter,
                    tag.page,
                    tag.mode
                );
                let fetcher = Arc::clone(&self.fetcher);
                self.pending.push(Box::pin(async move {
                    let result = fetcher
                        .fetch_listing(&tag.filter, tag.page, page_size)
                        .await;
                    (tag, result)
                }));
            }
        }
    }

    fn publish(&mut self) {
        if self.state.consume_dirty() {
            self.snapshot_tx.send_replace(self.state.view());
        }
    }
}
