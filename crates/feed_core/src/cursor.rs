/// Whether a load replaces the feed or appends to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadMode {
    Reset,
    Continue,
}

/// Position of the next page to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationCursor {
    /// Next fetch replaces everything and requests page 1.
    #[default]
    Reset,
    /// Next fetch appends and requests the given page.
    Continue(u32),
}

impl PaginationCursor {
    pub fn mode(self) -> LoadMode {
        match self {
            PaginationCursor::Reset => LoadMode::Reset,
            PaginationCursor::Continue(_) => LoadMode::Continue,
        }
    }

    /// Page index the next fetch requests (1-based).
    pub fn next_page(self) -> u32 {
        match self {
            PaginationCursor::Reset => 1,
            PaginationCursor::Continue(page) => page,
        }
    }

    /// Cursor after a successful fetch of `next_page()`.
    pub fn advance(self) -> Self {
        PaginationCursor::Continue(self.next_page().saturating_add(1))
    }
}
