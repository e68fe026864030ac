pub type PostId = u64;
pub type CommunityId = u64;

/// The signed-in user's vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vote {
    Up,
    #[default]
    None,
    Down,
}

impl Vote {
    /// Maps the API's `my_vote` score onto a vote. Absent means no vote.
    pub fn from_score(score: Option<i8>) -> Self {
        match score {
            Some(s) if s > 0 => Vote::Up,
            Some(s) if s < 0 => Vote::Down,
            _ => Vote::None,
        }
    }

    pub fn score(self) -> i8 {
        match self {
            Vote::Up => 1,
            Vote::None => 0,
            Vote::Down => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityRef {
    pub id: CommunityId,
    pub name: String,
}

/// A post as held in the feed. Identity is `id`; every other field may change
/// between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub vote: Vote,
    pub community: CommunityRef,
    pub title: String,
    pub body: Option<String>,
    pub url: Option<String>,
    pub creator: String,
    pub score: i64,
    pub comment_count: u32,
}

impl Post {
    /// Returns a copy of this post carrying `vote`.
    pub fn with_vote(&self, vote: Vote) -> Self {
        Self {
            vote,
            ..self.clone()
        }
    }
}

/// One page of a listing as returned by a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: u32,
    pub posts: Vec<Post>,
}

impl Page {
    pub fn new(index: u32, posts: Vec<Post>) -> Self {
        Self { index, posts }
    }
}
