//! Feed engine: fetch capability, HTTP client and the async driver around
//! the feed state machine.
mod actions;
mod client;
mod engine;
mod fetch;
mod types;
mod wire;

pub use actions::FeedActions;
pub use client::{ClientSettings, LemmyClient};
pub use engine::FeedEngine;
pub use fetch::ListingFetcher;
pub use types::{ActionError, ClientError, CommentId, CommentView, CommunitySummary, FetchError};
