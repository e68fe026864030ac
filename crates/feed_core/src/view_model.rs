use crate::{FeedPhase, ListingFilter, Post};

/// Read-only view of a feed handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedSnapshot {
    pub items: Option<Vec<Post>>,
    pub loading: bool,
    pub error: bool,
    pub filter: ListingFilter,
    pub phase: FeedPhase,
    pub error_message: Option<String>,
    /// Consecutive continue loads that added no new posts.
    pub empty_page_streak: u32,
    pub next_page: u32,
}

impl FeedSnapshot {
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full-screen spinner: loading with nothing to show yet.
    pub fn shows_loading_view(&self) -> bool {
        self.loading && self.items.is_none()
    }

    /// Footer spinner: loading more below existing content.
    pub fn shows_loading_footer(&self) -> bool {
        self.loading && !self.is_empty()
    }
}
