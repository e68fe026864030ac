use std::sync::Arc;

use feed_core::{CommunityId, ListingScope, Post, PostId, Vote, VoteEventSink};
use feed_logging::{feed_info, feed_warn};

use crate::wire::{
    CommentResponse, CommunityResponse, CreateComment, CreatePostLike, FollowCommunity,
    ListCommunitiesResponse, PostResponse,
};
use crate::{ActionError, CommentId, CommentView, CommunitySummary, LemmyClient};

/// Communities fetched per listing request.
const COMMUNITY_LIST_LIMIT: u32 = 50;

/// Write actions a user can take from any screen.
///
/// Votes cast here are published to the shared [`VoteEventSink`] so whichever
/// feed is showing the post picks up the change without reloading.
#[derive(Debug, Clone)]
pub struct FeedActions {
    client: Arc<LemmyClient>,
    votes: VoteEventSink,
}

impl FeedActions {
    pub fn new(client: Arc<LemmyClient>, votes: VoteEventSink) -> Self {
        Self { client, votes }
    }

    /// Replies to a post, or to a comment when `parent_id` is set.
    pub async fn create_comment(
        &self,
        post_id: PostId,
        parent_id: Option<CommentId>,
        content: &str,
    ) -> Result<CommentView, ActionError> {
        if content.trim().is_empty() {
            return Err(ActionError::EmptyInput);
        }

        let body = CreateComment {
            content,
            post_id,
            parent_id,
            auth: self.client.auth_token(),
        };
        let response: CommentResponse = self
            .client
            .post("api/v3/comment", &body)
            .await
            .inspect_err(|err| feed_warn!("comment on post {} failed: {}", post_id, err))?;
        Ok(response.comment_view.into())
    }

    /// Casts `vote` on a post and announces it to open feeds.
    pub async fn cast_vote(&self, post_id: PostId, vote: Vote) -> Result<Post, ActionError> {
        let body = CreatePostLike {
            post_id,
            score: vote.score(),
            auth: self.client.auth_token(),
        };
        let response: PostResponse = self
            .client
            .post("api/v3/post/like", &body)
            .await
            .inspect_err(|err| feed_warn!("vote on post {} failed: {}", post_id, err))?;

        self.votes.publish(post_id, vote);
        Ok(Post::from(response.post_view).with_vote(vote))
    }

    pub async fn follow_community(
        &self,
        community_id: CommunityId,
        follow: bool,
    ) -> Result<CommunitySummary, ActionError> {
        let body = FollowCommunity {
            community_id,
            follow,
            auth: self.client.auth_token(),
        };
        let response: CommunityResponse =
            self.client.post("api/v3/community/follow", &body).await?;
        feed_info!(
            "{} community {}",
            if follow { "subscribed to" } else { "unsubscribed from" },
            community_id
        );
        Ok(response.community_view.into())
    }

    /// Lists communities in `scope`. Subscribed communities come back sorted
    /// by name.
    pub async fn list_communities(
        &self,
        scope: ListingScope,
    ) -> Result<Vec<CommunitySummary>, ActionError> {
        let query = [
            ("type_", scope.as_api_str().to_string()),
            ("limit", COMMUNITY_LIST_LIMIT.to_string()),
        ];
        let response: ListCommunitiesResponse =
            self.client.get("api/v3/community/list", &query).await?;

        let mut communities: Vec<CommunitySummary> = response
            .communities
            .into_iter()
            .map(CommunitySummary::from)
            .collect();
        if scope == ListingScope::Subscribed {
            communities.sort_by_cached_key(|community| community.name.to_lowercase());
        }
        Ok(communities)
    }
}
