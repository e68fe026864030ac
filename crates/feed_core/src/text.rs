//! Truncation helpers for rendering feed rows.

const ELLIPSIS: &str = "...";

pub const NAME_LIMIT: usize = 16;
pub const LINK_LIMIT: usize = 36;
pub const BODY_LIMIT: usize = 500;

/// Cuts `text` to at most `limit` characters, appending `...` when cut.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

pub fn truncate_name(name: &str) -> String {
    truncate(name, NAME_LIMIT)
}

pub fn truncate_link(link: &str) -> String {
    truncate(link, LINK_LIMIT)
}

/// Post bodies are optional; a missing body renders as empty.
pub fn truncate_body(body: Option<&str>, limit: Option<usize>) -> String {
    match body {
        Some(body) => truncate(body, limit.unwrap_or(BODY_LIMIT)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_name("rust"), "rust");
        assert_eq!(truncate_name("exactly16charsxx"), "exactly16charsxx");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_name("a_rather_long_community"), "a_rather_long_co...");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn cuts_on_char_boundaries() {
        assert_eq!(truncate("ääää", 2), "ää...");
    }

    #[test]
    fn missing_body_is_empty() {
        assert_eq!(truncate_body(None, None), "");
        assert_eq!(truncate_body(Some("hello"), Some(2)), "he...");
    }
}
