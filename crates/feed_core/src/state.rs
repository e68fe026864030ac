use feed_logging::feed_debug;

use crate::dedupe::{dedupe, trailing_window};
use crate::view_model::FeedSnapshot;
use crate::{
    FailureKind, FeedSettings, FetchRequest, ListingFilter, LoadMode, Page, PaginationCursor,
    Post, RequestTag, VoteUpdate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle,
    Loading(LoadMode),
    Error(LoadMode),
}

/// Everything one feed view knows. Owned exclusively by its engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    filter: ListingFilter,
    settings: FeedSettings,
    /// `None` before the first successful load and after a failed reset load.
    items: Option<Vec<Post>>,
    phase: FeedPhase,
    cursor: PaginationCursor,
    generation: u64,
    in_flight: Option<RequestTag>,
    last_failure: Option<FailureKind>,
    empty_page_streak: u32,
    dirty: bool,
}

impl FeedState {
    pub fn new(filter: ListingFilter, settings: FeedSettings) -> Self {
        Self {
            filter,
            settings,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    pub fn items(&self) -> Option<&[Post]> {
        self.items.as_deref()
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    pub fn in_flight(&self) -> Option<&RequestTag> {
        self.in_flight.as_ref()
    }

    pub fn last_failure(&self) -> Option<&FailureKind> {
        self.last_failure.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading(_))
    }

    /// A successful load returned nothing, so there is nothing to page through.
    pub fn is_known_empty(&self) -> bool {
        matches!(self.items.as_deref(), Some([]))
    }

    pub fn view(&self) -> FeedSnapshot {
        FeedSnapshot {
            items: self.items.clone(),
            loading: self.is_loading(),
            error: matches!(self.phase, FeedPhase::Error(_)),
            filter: self.filter.clone(),
            phase: self.phase,
            error_message: match self.phase {
                FeedPhase::Error(_) => self.last_failure.as_ref().map(FailureKind::user_message),
                _ => None,
            },
            empty_page_streak: self.empty_page_streak,
            next_page: self.cursor.next_page(),
        }
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_filter(&mut self, filter: ListingFilter) {
        self.filter = filter;
        self.cursor = PaginationCursor::Reset;
        self.empty_page_streak = 0;
        self.dirty = true;
    }

    pub(crate) fn reset_cursor(&mut self) {
        self.cursor = PaginationCursor::Reset;
        self.empty_page_streak = 0;
    }

    /// Starts a load at the cursor and makes it the only request whose result
    /// will be accepted.
    pub(crate) fn begin_load(&mut self) -> FetchRequest {
        self.generation += 1;
        let mode = self.cursor.mode();
        let tag = RequestTag {
            generation: self.generation,
            filter: self.filter.clone(),
            page: self.cursor.next_page(),
            mode,
        };
        self.in_flight = Some(tag.clone());
        self.phase = FeedPhase::Loading(mode);
        self.dirty = true;
        FetchRequest {
            tag,
            page_size: self.settings.page_size,
        }
    }

    /// Only the latest issued request, under the current filter, may mutate state.
    pub(crate) fn accepts(&self, request: &RequestTag) -> bool {
        self.in_flight.as_ref() == Some(request) && request.filter == self.filter
    }

    pub(crate) fn apply_page(&mut self, request: &RequestTag, page: Page) {
        self.in_flight = None;
        match request.mode {
            LoadMode::Reset => {
                self.empty_page_streak = u32::from(page.posts.is_empty());
                self.items = Some(page.posts);
            }
            LoadMode::Continue => {
                let window = self.settings.dedupe_window;
                let items = self.items.get_or_insert_with(Vec::new);
                let received = page.posts.len();
                let fresh = dedupe(trailing_window(items, window), page.posts);
                feed_debug!(
                    "page {} for {}: {} received, {} new",
                    request.page,
                    request.filter,
                    received,
                    fresh.len()
                );
                if fresh.is_empty() {
                    self.empty_page_streak += 1;
                } else {
                    self.empty_page_streak = 0;
                }
                items.extend(fresh);
            }
        }
        self.cursor = self.cursor.advance();
        self.phase = FeedPhase::Idle;
        self.last_failure = None;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, request: &RequestTag, failure: FailureKind) {
        self.in_flight = None;
        if request.mode == LoadMode::Reset {
            self.items = None;
        }
        self.phase = FeedPhase::Error(request.mode);
        self.last_failure = Some(failure);
        self.dirty = true;
    }

    /// Replaces the vote on the matching post. Returns false if the post is
    /// not part of this feed.
    pub(crate) fn apply_vote(&mut self, update: VoteUpdate) -> bool {
        let Some(items) = self.items.as_mut() else {
            return false;
        };
        let Some(slot) = items.iter_mut().find(|post| post.id == update.post_id) else {
            return false;
        };
        if slot.vote != update.vote {
            *slot = slot.with_vote(update.vote);
            self.dirty = true;
        }
        true
    }
}
