use std::fmt;

/// Message shown when the server rejects a request for rate limiting.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit error. Please try again shortly...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    RateLimited,
    /// Any other server-reported error, carrying the server's error text.
    Other(String),
}

/// Why a fetch failed, as far as the feed state cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or timeout. Always retryable.
    Network,
    Api(ApiErrorKind),
}

impl FailureKind {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FailureKind::Api(ApiErrorKind::RateLimited))
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            FailureKind::Network => "Network error. Check your connection and retry.".to_string(),
            FailureKind::Api(ApiErrorKind::RateLimited) => RATE_LIMIT_MESSAGE.to_string(),
            FailureKind::Api(ApiErrorKind::Other(text)) => format!("Server error: {text}"),
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Api(ApiErrorKind::RateLimited) => write!(f, "rate limited"),
            FailureKind::Api(ApiErrorKind::Other(text)) => write!(f, "api error: {text}"),
        }
    }
}
