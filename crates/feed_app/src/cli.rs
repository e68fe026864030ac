use std::path::PathBuf;

use clap::Parser;
use feed_core::{CommunityId, ListingFilter, ListingScope, SortOrder};

/// Browse a link-aggregator feed from the terminal.
#[derive(Debug, Parser)]
#[command(name = "feed", version)]
pub struct Args {
    /// Instance root URL.
    #[arg(long, default_value = "https://lemmy.ml")]
    pub instance: String,

    /// Session token for a signed-in account.
    #[arg(long, env = "FEED_AUTH_TOKEN")]
    pub token: Option<String>,

    /// Sort order: Active, Hot, New, TopDay, TopWeek, MostComments.
    #[arg(long, default_value = "Hot", value_parser = parse_sort)]
    pub sort: SortOrder,

    /// Listing scope: All, Local, Subscribed.
    #[arg(long, default_value = "All", value_parser = parse_scope)]
    pub scope: ListingScope,

    /// Show a single community instead of a scope.
    #[arg(long)]
    pub community: Option<CommunityId>,

    /// Number of pages to load.
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    #[arg(long, default_value_t = 20)]
    pub page_size: u32,

    /// Stop paginating after this many pages in a row add nothing new.
    #[arg(long, default_value_t = 2)]
    pub max_empty_pages: u32,

    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn filter(&self) -> ListingFilter {
        match self.community {
            Some(id) => ListingFilter::for_community(self.sort, id),
            None => ListingFilter::new(self.sort, self.scope),
        }
    }
}

fn parse_sort(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).ok_or_else(|| format!("unknown sort order '{raw}'"))
}

fn parse_scope(raw: &str) -> Result<ListingScope, String> {
    ListingScope::parse(raw).ok_or_else(|| format!("unknown listing scope '{raw}'"))
}
