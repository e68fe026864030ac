use crate::dedupe::DEFAULT_DEDUPE_WINDOW;

/// Tunables for one feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    /// Posts requested per page.
    pub page_size: u32,
    /// How many trailing items each incoming page is deduplicated against.
    /// A larger window catches further rank drift at a higher per-page cost.
    pub dedupe_window: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            dedupe_window: DEFAULT_DEDUPE_WINDOW,
        }
    }
}
