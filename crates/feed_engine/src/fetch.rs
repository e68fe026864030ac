use feed_core::{ListingFilter, Page, Post};

use crate::wire::GetPostsResponse;
use crate::{FetchError, LemmyClient};

/// Source of listing pages. Calls are not cancellable; a caller that loses
/// interest simply ignores the result.
#[async_trait::async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch_listing(
        &self,
        filter: &ListingFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page, FetchError>;
}

#[async_trait::async_trait]
impl ListingFetcher for LemmyClient {
    async fn fetch_listing(
        &self,
        filter: &ListingFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page, FetchError> {
        let mut query = vec![
            ("type_", filter.scope.as_api_str().to_string()),
            ("sort", filter.sort.as_api_str().to_string()),
            ("page", page.to_string()),
            ("limit", page_size.to_string()),
        ];
        if let Some(community_id) = filter.community_id {
            query.push(("community_id", community_id.to_string()));
        }

        let response: GetPostsResponse = self.get("api/v3/post/list", &query).await?;
        let posts = response.posts.into_iter().map(Post::from).collect();
        Ok(Page::new(page, posts))
    }
}
