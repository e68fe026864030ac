use crate::{ListingFilter, LoadMode};

/// Identifies one issued fetch so its completion can be matched to the state
/// that asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag {
    /// Strictly increasing per feed; every new load gets a fresh value.
    pub generation: u64,
    pub filter: ListingFilter,
    pub page: u32,
    pub mode: LoadMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub tag: RequestTag,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(FetchRequest),
}
