use feed_logging::{feed_debug, feed_info, feed_trace, feed_warn};

use crate::{Effect, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilterChanged(filter) => {
            if filter == *state.filter() {
                return (state, Vec::new());
            }
            feed_info!("filter changed {} -> {}", state.filter(), filter);
            state.set_filter(filter);
            vec![Effect::FetchPage(state.begin_load())]
        }
        Msg::LoadMoreRequested => {
            if state.is_loading() {
                feed_trace!("load more ignored: fetch already in flight");
                Vec::new()
            } else if state.is_known_empty() {
                feed_trace!("load more ignored: feed is empty");
                Vec::new()
            } else {
                vec![Effect::FetchPage(state.begin_load())]
            }
        }
        Msg::RefreshRequested => {
            state.reset_cursor();
            vec![Effect::FetchPage(state.begin_load())]
        }
        Msg::PageLoaded { request, result } => {
            if !state.accepts(&request) {
                feed_debug!(
                    "discarding stale response generation={} filter={} page={}",
                    request.generation,
                    request.filter,
                    request.page
                );
                return (state, Vec::new());
            }
            match result {
                Ok(page) => state.apply_page(&request, page),
                Err(failure) => {
                    feed_warn!(
                        "{:?} load of page {} for {} failed: {}",
                        request.mode,
                        request.page,
                        request.filter,
                        failure
                    );
                    state.apply_failure(&request, failure);
                }
            }
            Vec::new()
        }
        Msg::VoteUpdated(update) => {
            state.apply_vote(update);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
