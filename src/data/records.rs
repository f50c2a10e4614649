//! In-memory collections
//!
//! All collection access goes through this module. `Records` owns the
//! users, posts and conversations along with the id sequences; the
//! service layer holds the business rules and calls down into the
//! low-level operations defined here.

use super::models::{
    CommentId, Conversation, ConversationId, MessageId, Post, PostId, User, UserId,
};
use super::seed::SeedData;
use crate::error::AppError;

/// Per-collection monotonic id sequences
///
/// Each sequence starts at the largest id present in the seed fixture and
/// only ever counts up, so ids are never reused after a deletion.
#[derive(Debug, Default)]
struct IdSequences {
    users: u64,
    posts: u64,
    comments: u64,
    conversations: u64,
    messages: u64,
}

fn next(sequence: &mut u64) -> u64 {
    *sequence += 1;
    *sequence
}

/// The authoritative in-memory collections
#[derive(Debug)]
pub struct Records {
    users: Vec<User>,
    posts: Vec<Post>,
    conversations: Vec<Conversation>,
    sequences: IdSequences,
}

impl Records {
    /// Build the collections from a validated seed fixture
    ///
    /// # Errors
    /// Returns `AppError::Seed` if the fixture violates a store invariant.
    pub fn from_seed(seed: SeedData) -> Result<Self, AppError> {
        seed.validate()?;

        let sequences = IdSequences {
            users: seed.users.iter().map(|u| u.id).max().unwrap_or(0),
            posts: seed.posts.iter().map(|p| p.id).max().unwrap_or(0),
            comments: seed
                .posts
                .iter()
                .flat_map(|p| p.comments.iter().map(|c| c.id))
                .max()
                .unwrap_or(0),
            conversations: seed.conversations.iter().map(|c| c.id).max().unwrap_or(0),
            messages: seed
                .conversations
                .iter()
                .flat_map(|c| c.messages.iter().map(|m| m.id))
                .max()
                .unwrap_or(0),
        };

        Ok(Self {
            users: seed.users,
            posts: seed.posts,
            conversations: seed.conversations,
            sequences,
        })
    }

    // =========================================================================
    // Id assignment
    // =========================================================================

    pub fn next_user_id(&mut self) -> UserId {
        next(&mut self.sequences.users)
    }

    pub fn next_post_id(&mut self) -> PostId {
        next(&mut self.sequences.posts)
    }

    pub fn next_comment_id(&mut self) -> CommentId {
        next(&mut self.sequences.comments)
    }

    pub fn next_conversation_id(&mut self) -> ConversationId {
        next(&mut self.sequences.conversations)
    }

    pub fn next_message_id(&mut self) -> MessageId {
        next(&mut self.sequences.messages)
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub(crate) fn get_user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }

    /// Case-insensitive username lookup
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        let needle = username.to_lowercase();
        self.users
            .iter()
            .find(|user| user.username.to_lowercase() == needle)
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replace the user record with a matching id
    pub fn update_user(&mut self, user: User) -> bool {
        match self.get_user_mut(user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Posts
    // =========================================================================

    /// The global feed, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub(crate) fn get_post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }

    /// Prepend a post to the feed (newest first)
    pub fn insert_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    /// Remove a post, preserving the order of the rest of the feed
    pub fn delete_post(&mut self, id: PostId) -> Option<Post> {
        let index = self.posts.iter().position(|post| post.id == id)?;
        Some(self.posts.remove(index))
    }

    pub fn posts_by_user(&self, user_id: UserId) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.user.id == user_id)
            .collect()
    }

    /// Rewrite the owner snapshot on every post the user owns
    ///
    /// Comment snapshots are left untouched: they carry the author's
    /// identity at comment time.
    pub(crate) fn rewrite_post_owner(&mut self, user: &User) -> usize {
        let mut rewritten = 0;
        for post in self.posts.iter_mut().filter(|p| p.user.id == user.id) {
            post.user = user.clone();
            rewritten += 1;
        }
        rewritten
    }

    // =========================================================================
    // Conversations
    // =========================================================================

    /// Conversation list, most recently active first
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get_conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_conversation_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Find the thread with a counterpart, regardless of position
    pub fn find_conversation_with(&self, counterpart: UserId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.user.id == counterpart)
    }

    /// Prepend a conversation to the list
    pub fn insert_conversation(&mut self, conversation: Conversation) {
        self.conversations.insert(0, conversation);
    }

    /// Move a conversation to the front of the list (most recently active)
    pub fn move_conversation_to_front(&mut self, id: ConversationId) -> bool {
        match self.conversations.iter().position(|c| c.id == id) {
            Some(0) => true,
            Some(index) => {
                let conversation = self.conversations.remove(index);
                self.conversations.insert(0, conversation);
                true
            }
            None => false,
        }
    }
}
