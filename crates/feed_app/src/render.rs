use feed_core::text::{truncate_link, truncate_name};
use feed_core::{FeedSnapshot, Post, Vote};

/// One terminal line per post.
pub fn render_row(post: &Post) -> String {
    let marker = match post.vote {
        Vote::Up => '+',
        Vote::None => ' ',
        Vote::Down => '-',
    };
    let mut line = format!(
        "{marker}{:>6}  {}  [{}] {} comments",
        post.score,
        post.title,
        truncate_name(&post.community.name),
        post.comment_count
    );
    if let Some(url) = &post.url {
        line.push_str("  ");
        line.push_str(&truncate_link(url));
    }
    line
}

pub fn render(snapshot: &FeedSnapshot) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", snapshot.filter)];
    match &snapshot.items {
        None if snapshot.loading => lines.push("Loading...".to_string()),
        None => {}
        Some(items) if items.is_empty() => lines.push("No posts.".to_string()),
        Some(items) => lines.extend(items.iter().map(render_row)),
    }
    if let Some(message) = &snapshot.error_message {
        let prefix = if snapshot.items.is_some() {
            "Failed to load more posts"
        } else {
            "Failed to load posts"
        };
        lines.push(format!("{prefix}: {message}"));
    }
    lines
}
