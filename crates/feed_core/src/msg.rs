use crate::{FailureKind, ListingFilter, Page, RequestTag, VoteUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a different sort order or listing scope.
    FilterChanged(ListingFilter),
    /// List scrolled near its end, or the user pressed a retry affordance.
    LoadMoreRequested,
    /// Pull-to-refresh: reload from page 1 under the current filter.
    RefreshRequested,
    /// A fetch finished, successfully or not.
    PageLoaded {
        request: RequestTag,
        result: Result<Page, FailureKind>,
    },
    /// A vote cast elsewhere in the app.
    VoteUpdated(VoteUpdate),
    NoOp,
}
