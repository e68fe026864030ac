//! Feed core: pure state machine for a paginated, deduplicated post feed.
mod cursor;
mod dedupe;
mod effect;
mod failure;
mod filter;
mod msg;
mod post;
mod settings;
mod state;
pub mod text;
mod update;
mod view_model;
mod vote;

pub use cursor::{LoadMode, PaginationCursor};
pub use dedupe::{dedupe, trailing_window, DEFAULT_DEDUPE_WINDOW};
pub use effect::{Effect, FetchRequest, RequestTag};
pub use failure::{ApiErrorKind, FailureKind, RATE_LIMIT_MESSAGE};
pub use filter::{ListingFilter, ListingScope, SortOrder};
pub use msg::Msg;
pub use post::{CommunityId, CommunityRef, Page, Post, PostId, Vote};
pub use settings::FeedSettings;
pub use state::{FeedPhase, FeedState};
pub use update::update;
pub use view_model::FeedSnapshot;
pub use vote::{VoteEventSink, VoteUpdate};
