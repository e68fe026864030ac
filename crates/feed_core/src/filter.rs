use std::fmt;

use crate::CommunityId;

/// Ranking criterion for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Active,
    Hot,
    New,
    TopDay,
    TopWeek,
    MostComments,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::TopDay,
        SortOrder::TopWeek,
        SortOrder::Hot,
        SortOrder::Active,
        SortOrder::New,
        SortOrder::MostComments,
    ];

    /// Name used by the remote API.
    pub fn as_api_str(self) -> &'static str {
        match self {
            SortOrder::Active => "Active",
            SortOrder::Hot => "Hot",
            SortOrder::New => "New",
            SortOrder::TopDay => "TopDay",
            SortOrder::TopWeek => "TopWeek",
            SortOrder::MostComments => "MostComments",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Active => "Active",
            SortOrder::Hot => "Hot",
            SortOrder::New => "New",
            SortOrder::TopDay => "Top Day",
            SortOrder::TopWeek => "Top Week",
            SortOrder::MostComments => "Most Comments",
        }
    }

    /// Parses an API name, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_api_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Which set of communities a listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingScope {
    All,
    Local,
    Subscribed,
}

impl ListingScope {
    pub const ALL: [ListingScope; 3] =
        [ListingScope::All, ListingScope::Local, ListingScope::Subscribed];

    pub fn as_api_str(self) -> &'static str {
        match self {
            ListingScope::All => "All",
            ListingScope::Local => "Local",
            ListingScope::Subscribed => "Subscribed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_api_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for ListingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Immutable description of which listing a feed shows.
///
/// Any change to a filter invalidates everything accumulated under the old one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingFilter {
    pub sort: SortOrder,
    pub scope: ListingScope,
    pub community_id: Option<CommunityId>,
}

impl ListingFilter {
    pub fn new(sort: SortOrder, scope: ListingScope) -> Self {
        Self {
            sort,
            scope,
            community_id: None,
        }
    }

    /// Filter for a single community's feed.
    pub fn for_community(sort: SortOrder, community_id: CommunityId) -> Self {
        Self {
            sort,
            scope: ListingScope::All,
            community_id: Some(community_id),
        }
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_scope(&self, scope: ListingScope) -> Self {
        Self {
            scope,
            ..self.clone()
        }
    }
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self::new(SortOrder::Hot, ListingScope::All)
    }
}

impl fmt::Display for ListingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.community_id {
            Some(id) => write!(f, "{}/{} community={}", self.sort, self.scope, id),
            None => write!(f, "{}/{}", self.sort, self.scope),
        }
    }
}
