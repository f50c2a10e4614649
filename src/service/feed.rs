//! Feed service
//!
//! Read-only queries over the store: the home feed, profile grids,
//! search, conversation listings and per-viewer like state. The view
//! layer re-renders from these after every mutation.

use crate::data::{Conversation, ConversationId, Post, PostId, Records, Session, User, UserId};

/// Feed service
pub struct FeedService<'a> {
    records: &'a Records,
    session: &'a Session,
}

impl<'a> FeedService<'a> {
    pub(crate) fn new(records: &'a Records, session: &'a Session) -> Self {
        Self { records, session }
    }

    /// The global feed, newest first
    pub fn home(&self) -> &[Post] {
        self.records.posts()
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.records.get_post(id)
    }

    /// Posts owned by one user, in feed order (profile grid)
    pub fn posts_by_user(&self, user_id: UserId) -> Vec<&Post> {
        self.records.posts_by_user(user_id)
    }

    /// Search posts by description, brand or category
    ///
    /// Case-insensitive substring match; a whitespace-only query yields
    /// nothing rather than the whole feed.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .posts()
            .iter()
            .filter(|post| {
                post.description.to_lowercase().contains(&query)
                    || post
                        .brand
                        .as_deref()
                        .is_some_and(|brand| brand.to_lowercase().contains(&query))
                    || post
                        .category
                        .as_deref()
                        .is_some_and(|category| category.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Conversation list, most recently active first
    pub fn conversations(&self) -> &[Conversation] {
        self.records.conversations()
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.records.get_conversation(id)
    }

    /// All members, in registration order
    pub fn users(&self) -> &[User] {
        self.records.users()
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.records.get_user(id)
    }

    /// Case-insensitive username lookup
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.records.find_user_by_username(username)
    }

    /// Whether the viewer currently likes the given post
    pub fn is_liked(&self, post_id: PostId) -> bool {
        self.session.likes(post_id)
    }

    /// Cached identity of the authenticated user
    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }
}
