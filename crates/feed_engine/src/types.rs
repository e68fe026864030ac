use feed_core::{ApiErrorKind, CommunityId, FailureKind, PostId};
use thiserror::Error;

pub type CommentId = u64;

/// A failed request to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn api(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Api(kind), message)
    }
}

/// Errors from user-initiated write actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Rejected locally; no request was made.
    #[error("nothing to submit")]
    EmptyInput,
    #[error(transparent)]
    Request(#[from] FetchError),
}

impl ActionError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ActionError::Request(err) if err.kind.is_rate_limited())
    }

    /// Text to show in an alert after a failed action.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::EmptyInput => "Nothing to submit.".to_string(),
            ActionError::Request(err) => err.kind.user_message(),
        }
    }
}

/// Problems building a client from its settings.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Build(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunitySummary {
    pub id: CommunityId,
    pub name: String,
    pub title: String,
    pub subscribed: bool,
}
