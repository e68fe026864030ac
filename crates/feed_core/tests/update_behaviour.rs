use std::sync::Once;

use feed_core::{
    update, ApiErrorKind, CommunityRef, Effect, FailureKind, FeedPhase, FeedSettings, FeedState,
    FetchRequest, ListingFilter, ListingScope, LoadMode, Msg, Page, PaginationCursor, Post,
    PostId, SortOrder, Vote, RATE_LIMIT_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn post(id: PostId) -> Post {
    Post {
        id,
        vote: Vote::None,
        community: CommunityRef {
            id: 7,
            name: "rust".to_string(),
        },
        title: format!("post {id}"),
        body: None,
        url: None,
        creator: "alice".to_string(),
        score: id as i64,
        comment_count: 0,
    }
}

fn new_all() -> ListingFilter {
    ListingFilter::new(SortOrder::New, ListingScope::All)
}

fn ids(state: &FeedState) -> Vec<PostId> {
    state
        .items()
        .expect("items loaded")
        .iter()
        .map(|p| p.id)
        .collect()
}

fn single_fetch(effects: &[Effect]) -> FetchRequest {
    match effects {
        [Effect::FetchPage(request)] => request.clone(),
        other => panic!("expected one fetch effect, got {other:?}"),
    }
}

fn complete(
    state: FeedState,
    request: &FetchRequest,
    ids: impl IntoIterator<Item = PostId>,
) -> FeedState {
    let page = Page::new(request.tag.page, ids.into_iter().map(post).collect());
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            request: request.tag.clone(),
            result: Ok(page),
        },
    );
    assert!(effects.is_empty());
    state
}

fn fail(state: FeedState, request: &FetchRequest, failure: FailureKind) -> FeedState {
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            request: request.tag.clone(),
            result: Err(failure),
        },
    );
    assert!(effects.is_empty());
    state
}

/// Loads page 1 with the given ids.
fn loaded(ids: impl IntoIterator<Item = PostId>) -> FeedState {
    let state = FeedState::new(new_all(), FeedSettings::default());
    let (state, effects) = update(state, Msg::RefreshRequested);
    let request = single_fetch(&effects);
    complete(state, &request, ids)
}

#[test]
fn initial_state_is_idle_without_items() {
    init_logging();
    let state = FeedState::new(new_all(), FeedSettings::default());
    let view = state.view();

    assert_eq!(view.items, None);
    assert!(!view.loading);
    assert!(!view.error);
    assert_eq!(view.phase, FeedPhase::Idle);
    assert_eq!(view.next_page, 1);
}

#[test]
fn first_load_more_issues_reset_load_for_page_one() {
    init_logging();
    let state = FeedState::new(new_all(), FeedSettings::default());
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);

    assert_eq!(request.tag.mode, LoadMode::Reset);
    assert_eq!(request.tag.page, 1);
    assert_eq!(request.tag.filter, new_all());
    assert_eq!(request.page_size, 20);
    assert_eq!(state.phase(), FeedPhase::Loading(LoadMode::Reset));
    assert!(state.view().shows_loading_view());
}

#[test]
fn overlapping_second_page_is_deduplicated() {
    init_logging();
    let state = loaded(1..=20);
    assert_eq!(ids(&state), (1..=20).collect::<Vec<_>>());
    assert_eq!(state.cursor(), PaginationCursor::Continue(2));

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    assert_eq!(request.tag.mode, LoadMode::Continue);
    assert_eq!(request.tag.page, 2);
    assert!(state.view().shows_loading_footer());

    let state = complete(state, &request, 15..=34);
    assert_eq!(ids(&state), (1..=34).collect::<Vec<_>>());
    assert_eq!(state.cursor(), PaginationCursor::Continue(3));
    assert_eq!(state.phase(), FeedPhase::Idle);
}

#[test]
fn load_more_while_loading_dispatches_nothing() {
    init_logging();
    let state = loaded(1..=20);
    let (mut state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects.len(), 1);
    let before = state.clone();

    for _ in 0..5 {
        let (next, effects) = update(state, Msg::LoadMoreRequested);
        assert!(effects.is_empty());
        state = next;
    }
    assert_eq!(state, before);
}

#[test]
fn continue_failure_preserves_items_and_retries_same_page() {
    init_logging();
    let state = loaded(1..=20);
    let before = state.items().map(<[Post]>::to_vec);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    let state = fail(state, &request, FailureKind::Network);

    assert_eq!(state.items().map(<[Post]>::to_vec), before);
    assert_eq!(state.phase(), FeedPhase::Error(LoadMode::Continue));
    let view = state.view();
    assert!(view.error);
    assert!(!view.loading);
    assert!(view.error_message.is_some());

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let retry = single_fetch(&effects);
    assert_eq!(retry.tag.page, 2);
    assert_eq!(retry.tag.mode, LoadMode::Continue);

    let state = complete(state, &retry, 21..=40);
    assert_eq!(ids(&state), (1..=40).collect::<Vec<_>>());
    assert!(state.view().error_message.is_none());
}

#[test]
fn reset_failure_clears_items() {
    init_logging();
    let state = loaded(1..=20);

    let (state, effects) = update(state, Msg::RefreshRequested);
    let request = single_fetch(&effects);
    assert_eq!(request.tag.mode, LoadMode::Reset);
    let state = fail(state, &request, FailureKind::Network);

    assert_eq!(state.items(), None);
    assert_eq!(state.phase(), FeedPhase::Error(LoadMode::Reset));

    // Retry goes back to page 1.
    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    let retry = single_fetch(&effects);
    assert_eq!(retry.tag.mode, LoadMode::Reset);
    assert_eq!(retry.tag.page, 1);
}

#[test]
fn empty_reset_is_a_valid_empty_feed() {
    init_logging();
    let state = loaded(std::iter::empty());

    assert_eq!(state.items(), Some(&[][..]));
    assert_eq!(state.phase(), FeedPhase::Idle);
    assert!(!state.view().error);

    let (next, effects) = update(state.clone(), Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn page_with_nothing_new_is_not_an_error() {
    init_logging();
    let state = loaded(1..=20);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    let state = complete(state, &request, 11..=20);

    assert_eq!(ids(&state), (1..=20).collect::<Vec<_>>());
    assert_eq!(state.phase(), FeedPhase::Idle);
    assert_eq!(state.cursor(), PaginationCursor::Continue(3));
    assert_eq!(state.view().empty_page_streak, 1);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    let state = complete(state, &request, std::iter::empty());
    assert_eq!(state.view().empty_page_streak, 2);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    let state = complete(state, &request, [21]);
    assert_eq!(state.view().empty_page_streak, 0);
}

#[test]
fn short_page_is_accepted() {
    init_logging();
    let state = loaded(1..=20);
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let request = single_fetch(&effects);
    let state = complete(state, &request, 21..=23);

    assert_eq!(state.items().map(<[Post]>::len), Some(23));
    assert_eq!(state.phase(), FeedPhase::Idle);
}

#[test]
fn same_filter_is_noop() {
    init_logging();
    let mut state = loaded(1..=5);
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state.clone(), Msg::FilterChanged(new_all()));
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}

#[test]
fn filter_change_resets_and_reloads() {
    init_logging();
    let state = loaded(1..=20);
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let state = complete(state, &single_fetch(&effects), 21..=40);
    assert_eq!(state.cursor(), PaginationCursor::Continue(3));

    let hot = ListingFilter::new(SortOrder::Hot, ListingScope::Subscribed);
    let (state, effects) = update(state, Msg::FilterChanged(hot.clone()));
    let request = single_fetch(&effects);
    assert_eq!(request.tag.mode, LoadMode::Reset);
    assert_eq!(request.tag.page, 1);
    assert_eq!(request.tag.filter, hot);
    assert_eq!(state.filter(), &hot);

    let state = complete(state, &request, 100..=104);
    assert_eq!(ids(&state), (100..=104).collect::<Vec<_>>());
    assert_eq!(state.cursor(), PaginationCursor::Continue(2));
}

#[test]
fn stale_response_from_previous_filter_is_discarded() {
    init_logging();
    let state = FeedState::new(new_all(), FeedSettings::default());
    let (state, effects) = update(state, Msg::RefreshRequested);
    let stale = single_fetch(&effects);

    let hot = ListingFilter::new(SortOrder::Hot, ListingScope::Subscribed);
    let (state, effects) = update(state, Msg::FilterChanged(hot.clone()));
    let current = single_fetch(&effects);

    // Old response lands while the new one is still pending.
    let (state, effects) = update(
        state.clone(),
        Msg::PageLoaded {
            request: stale.tag.clone(),
            result: Ok(Page::new(1, (1..=20).map(post).collect())),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.items(), None);
    assert_eq!(state.filter(), &hot);
    assert_eq!(state.phase(), FeedPhase::Loading(LoadMode::Reset));

    let state = complete(state, &current, 50..=52);
    assert_eq!(ids(&state), vec![50, 51, 52]);

    // And once more after the new filter settled.
    let before = state.clone();
    let state = complete(state, &stale, 1..=20);
    assert_eq!(state, before);
}

#[test]
fn stale_failure_does_not_clear_current_items() {
    init_logging();
    let state = FeedState::new(new_all(), FeedSettings::default());
    let (state, effects) = update(state, Msg::RefreshRequested);
    let stale = single_fetch(&effects);

    let hot = ListingFilter::new(SortOrder::Hot, ListingScope::All);
    let (state, effects) = update(state, Msg::FilterChanged(hot));
    let state = complete(state, &single_fetch(&effects), 1..=3);

    let state = fail(state, &stale, FailureKind::Network);
    assert_eq!(ids(&state), vec![1, 2, 3]);
    assert_eq!(state.phase(), FeedPhase::Idle);
}

#[test]
fn refresh_while_loading_supersedes_the_older_request() {
    init_logging();
    let state = loaded(1..=20);
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let older = single_fetch(&effects);

    let (state, effects) = update(state, Msg::RefreshRequested);
    let newer = single_fetch(&effects);
    assert!(newer.tag.generation > older.tag.generation);
    assert_eq!(newer.tag.page, 1);

    let state = complete(state, &older, 21..=40);
    assert_eq!(ids(&state), (1..=20).collect::<Vec<_>>());

    let state = complete(state, &newer, 5..=9);
    assert_eq!(ids(&state), (5..=9).collect::<Vec<_>>());
}

#[test]
fn rate_limit_failure_has_its_own_message() {
    init_logging();
    let state = loaded(1..=20);
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let state = fail(
        state,
        &single_fetch(&effects),
        FailureKind::Api(ApiErrorKind::RateLimited),
    );

    assert_eq!(state.view().error_message.as_deref(), Some(RATE_LIMIT_MESSAGE));
    assert!(state.last_failure().is_some_and(FailureKind::is_rate_limited));
}

#[test]
fn custom_dedupe_window_limits_comparison() {
    init_logging();
    let settings = FeedSettings {
        page_size: 10,
        dedupe_window: 5,
    };
    let state = FeedState::new(new_all(), settings);
    let (state, effects) = update(state, Msg::RefreshRequested);
    let request = single_fetch(&effects);
    assert_eq!(request.page_size, 10);
    let state = complete(state, &request, 1..=10);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    // 3 is outside the trailing five, 8 is inside.
    let state = complete(state, &single_fetch(&effects), [3, 8, 11]);
    assert_eq!(
        ids(&state),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 3, 11]
    );
}
