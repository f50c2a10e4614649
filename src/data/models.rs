//! Data models
//!
//! Rust structs representing the in-memory entities and the session.
//! All models use numeric ids and chrono for timestamps. Display-facing
//! timestamp labels are stored alongside `created_at` because the view
//! layer renders the label verbatim.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ID Types
// =============================================================================

/// User id (assigned from a monotonic sequence, never reused)
pub type UserId = u64;
/// Post id (assigned from a monotonic sequence, never reused)
pub type PostId = u64;
/// Comment id (unique across all posts)
pub type CommentId = u64;
/// Conversation id
pub type ConversationId = u64;
/// Message id (unique across all conversations)
pub type MessageId = u64;

/// Timestamp label attached to freshly created entities ("just now")
pub const NOW_LABEL: &str = "الآن";

// =============================================================================
// User
// =============================================================================

/// A member of the marketplace
///
/// Created at seed time or by sign-up; mutated only by profile edits and
/// post-count adjustments; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique under case-insensitive comparison
    pub username: String,
    /// Opaque credential, compared case-sensitively (mock auth only)
    pub password: String,
    pub full_name: String,
    pub avatar_url: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    /// Must equal the number of posts this user owns after every mutation
    pub posts_count: u32,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Post
// =============================================================================

/// A feed entry offering an item (or just an outfit photo)
///
/// Owns an embedded snapshot of its author; `ProfileService::update`
/// rewrites the snapshot on every owned post to keep them in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Owner snapshot, kept in sync with the users collection
    pub user: User,
    pub image_url: String,
    pub description: String,
    /// Asking price, absent for non-sale posts
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    /// Aggregate counter across all viewers
    pub likes: u32,
    /// Append-only, chronological
    pub comments: Vec<Comment>,
    /// Display label rendered by the view layer
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

/// A comment under a post
///
/// The author snapshot is frozen at comment time and is intentionally
/// not rewritten by profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: User,
    pub text: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Conversations
// =============================================================================

/// A direct-message thread with one counterpart
///
/// The session user's side is implicit; only the counterpart is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    /// The other participant
    pub user: User,
    /// Append-only, chronological
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Most recent message, if any (list previews)
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// A single direct message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub text: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Session
// =============================================================================

/// Per-viewer session state
///
/// At most one authenticated user at a time. The liked-id set is the
/// viewer's side of the like relation and is distinct from the aggregate
/// counter on each post; it survives logout (matching the reference
/// behavior), while a pending delete confirmation does not.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    liked_post_ids: HashSet<PostId>,
    pending_delete: Option<PostId>,
}

impl Session {
    /// Whether a user is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Cached identity of the authenticated user
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Id of the authenticated user
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Whether the viewer currently likes the given post
    pub fn likes(&self, post_id: PostId) -> bool {
        self.liked_post_ids.contains(&post_id)
    }

    /// Post ids the viewer currently likes
    pub fn liked_post_ids(&self) -> &HashSet<PostId> {
        &self.liked_post_ids
    }

    pub(crate) fn authenticate(&mut self, user: User) {
        self.pending_delete = None;
        self.user = Some(user);
    }

    pub(crate) fn clear(&mut self) {
        // Liked ids are intentionally retained across logout.
        self.user = None;
        self.pending_delete = None;
    }

    pub(crate) fn user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    /// Flips membership of `post_id` in the liked set.
    ///
    /// Returns the new liked state.
    pub(crate) fn toggle_liked(&mut self, post_id: PostId) -> bool {
        if self.liked_post_ids.remove(&post_id) {
            false
        } else {
            self.liked_post_ids.insert(post_id);
            true
        }
    }

    pub(crate) fn forget_liked(&mut self, post_id: PostId) {
        self.liked_post_ids.remove(&post_id);
    }

    pub(crate) fn pending_delete(&self) -> Option<PostId> {
        self.pending_delete
    }

    pub(crate) fn set_pending_delete(&mut self, post_id: PostId) {
        self.pending_delete = Some(post_id);
    }

    pub(crate) fn clear_pending_delete(&mut self) {
        self.pending_delete = None;
    }
}
