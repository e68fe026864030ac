//! JSON shapes of the v3 HTTP API.

use feed_core::{CommunityRef, Post, Vote};
use serde::{Deserialize, Serialize};

use crate::{CommentId, CommentView, CommunitySummary};

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPostsResponse {
    pub posts: Vec<PostView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostView {
    pub post: PostRecord,
    pub creator: PersonRecord,
    pub community: CommunityRecord,
    #[serde(default)]
    pub counts: PostCounts,
    #[serde(default)]
    pub my_vote: Option<i8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonRecord {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommunityRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostCounts {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub comments: u32,
}

impl From<PostView> for Post {
    fn from(view: PostView) -> Self {
        Post {
            id: view.post.id,
            vote: Vote::from_score(view.my_vote),
            community: CommunityRef {
                id: view.community.id,
                name: view.community.name,
            },
            title: view.post.name,
            body: view.post.body,
            url: view.post.url,
            creator: view.creator.name,
            score: view.counts.score,
            comment_count: view.counts.comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateComment<'a> {
    pub content: &'a str,
    pub post_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentResponse {
    pub comment_view: CommentViewRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentViewRecord {
    pub comment: CommentRecord,
    pub creator: PersonRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentRecord {
    pub id: CommentId,
    pub post_id: u64,
    pub content: String,
    /// Materialized path such as `0.12.34`; the last segment is this comment.
    #[serde(default)]
    pub path: Option<String>,
}

impl From<CommentViewRecord> for CommentView {
    fn from(view: CommentViewRecord) -> Self {
        let parent_id = view.comment.path.as_deref().and_then(parent_from_path);
        CommentView {
            id: view.comment.id,
            post_id: view.comment.post_id,
            parent_id,
            content: view.comment.content,
            creator: view.creator.name,
        }
    }
}

fn parent_from_path(path: &str) -> Option<CommentId> {
    let mut segments = path.rsplit('.').skip(1);
    segments
        .next()
        .and_then(|segment| segment.parse().ok())
        .filter(|id| *id != 0)
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePostLike<'a> {
    pub post_id: u64,
    pub score: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostResponse {
    pub post_view: PostView,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowCommunity<'a> {
    pub community_id: u64,
    pub follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommunityResponse {
    pub community_view: CommunityViewRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListCommunitiesResponse {
    pub communities: Vec<CommunityViewRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommunityViewRecord {
    pub community: CommunityRecord,
    #[serde(default)]
    pub subscribed: SubscribedType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) enum SubscribedType {
    Subscribed,
    #[default]
    NotSubscribed,
    Pending,
}

impl From<CommunityViewRecord> for CommunitySummary {
    fn from(view: CommunityViewRecord) -> Self {
        CommunitySummary {
            id: view.community.id,
            name: view.community.name,
            title: view.community.title,
            subscribed: view.subscribed != SubscribedType::NotSubscribed,
        }
    }
}
