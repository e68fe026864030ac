use std::collections::HashSet;

use crate::{Post, PostId};

/// Default number of trailing items compared against each incoming page.
pub const DEFAULT_DEDUPE_WINDOW: usize = 50;

/// Returns the last `len` items of `items` (all of them if there are fewer).
pub fn trailing_window(items: &[Post], len: usize) -> &[Post] {
    let start = items.len().saturating_sub(len);
    &items[start..]
}

/// Drops posts from `incoming` whose id already appears in `window`.
///
/// Live-ranked sorts let a post cross a page boundary between two fetches, so
/// it shows up at the end of page K and again at the start of page K+1. Only
/// the already-accepted window is consulted; repeats inside `incoming` itself
/// are kept. Order of `incoming` is preserved.
pub fn dedupe(window: &[Post], incoming: Vec<Post>) -> Vec<Post> {
    let seen: HashSet<PostId> = window.iter().map(|post| post.id).collect();
    incoming
        .into_iter()
        .filter(|post| !seen.contains(&post.id))
        .collect()
}
