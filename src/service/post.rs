//! Post service
//!
//! Handles post operations: publish, two-step delete, like toggling and
//! commenting. Every operation requires an authenticated session and
//! silently leaves the state unchanged when a precondition fails.

use chrono::Utc;

use crate::data::{Comment, NOW_LABEL, Post, PostId, Records, Session};

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Post service
pub struct PostService<'a> {
    records: &'a mut Records,
    session: &'a mut Session,
}

impl<'a> PostService<'a> {
    pub(crate) fn new(records: &'a mut Records, session: &'a mut Session) -> Self {
        Self { records, session }
    }

    /// Publish a post to the top of the feed
    ///
    /// # Arguments
    /// * `description` - Item description (required, trimmed)
    /// * `image_url` - Resolved image URL (required)
    /// * `price` - Asking price, absent for non-sale posts
    /// * `brand` / `category` - Optional marketplace facets
    ///
    /// # Side Effects
    /// Increments the owner's posts_count on the users collection and on
    /// the session's cached identity. The embedded owner snapshot carries
    /// the pre-publish counter, like every other snapshot taken before a
    /// mutation.
    pub fn create(
        &mut self,
        description: &str,
        image_url: &str,
        price: Option<f64>,
        brand: Option<String>,
        category: Option<String>,
    ) -> Option<Post> {
        let author = self.session.user()?.clone();

        let description = description.trim();
        if description.is_empty() {
            tracing::debug!("post rejected: empty description");
            return None;
        }
        if url::Url::parse(image_url).is_err() {
            tracing::debug!(image_url, "post rejected: image URL does not resolve");
            return None;
        }

        let id = self.records.next_post_id();
        let post = Post {
            id,
            user: author.clone(),
            image_url: image_url.to_string(),
            description: description.to_string(),
            price,
            brand: normalize_optional_text(brand),
            category: normalize_optional_text(category),
            likes: 0,
            comments: Vec::new(),
            timestamp: NOW_LABEL.to_string(),
            created_at: Utc::now(),
        };
        self.records.insert_post(post.clone());

        if let Some(owner) = self.records.get_user_mut(author.id) {
            owner.posts_count += 1;
        }
        if let Some(cached) = self.session.user_mut() {
            cached.posts_count += 1;
        }

        tracing::info!(post_id = id, user_id = author.id, "post published");
        Some(post)
    }

    /// Register a delete confirmation for an owned post
    ///
    /// First half of the two-step delete protocol: the view layer asks
    /// the user to confirm and reports back via [`Self::resolve_delete`].
    /// The pending request is bound to the session and cleared by logout.
    ///
    /// # Returns
    /// false if the session user does not own the post (feed unchanged)
    pub fn request_delete(&mut self, post_id: PostId) -> bool {
        let Some(user_id) = self.session.user_id() else {
            return false;
        };
        let Some(post) = self.records.get_post(post_id) else {
            return false;
        };
        if post.user.id != user_id {
            tracing::debug!(post_id, user_id, "delete rejected: not the owner");
            return false;
        }

        self.session.set_pending_delete(post_id);
        tracing::debug!(post_id, user_id, "delete confirmation pending");
        true
    }

    /// Commit or cancel a pending delete
    ///
    /// # Returns
    /// true only when a matching pending request exists and `confirmed`
    /// is true; the post is then removed and the owner's posts_count
    /// decremented on both the collection and the session cache.
    pub fn resolve_delete(&mut self, post_id: PostId, confirmed: bool) -> bool {
        if self.session.pending_delete() != Some(post_id) {
            return false;
        }
        self.session.clear_pending_delete();

        if !confirmed {
            tracing::debug!(post_id, "delete declined");
            return false;
        }

        let Some(post) = self.records.delete_post(post_id) else {
            return false;
        };
        if let Some(owner) = self.records.get_user_mut(post.user.id) {
            owner.posts_count = owner.posts_count.saturating_sub(1);
        }
        if let Some(cached) = self.session.user_mut() {
            cached.posts_count = cached.posts_count.saturating_sub(1);
        }
        // The counter is gone with the post, so the viewer's like goes too.
        self.session.forget_liked(post_id);

        tracing::info!(post_id, user_id = post.user.id, "post deleted");
        true
    }

    /// Flip the viewer's like on a post
    ///
    /// Adjusts the aggregate counter by exactly one in the matching
    /// direction; a double toggle restores both the counter and the
    /// liked set.
    ///
    /// # Returns
    /// The new liked state, or None if the post does not exist or the
    /// session is anonymous.
    pub fn toggle_like(&mut self, post_id: PostId) -> Option<bool> {
        self.session.user_id()?;
        let post = self.records.get_post_mut(post_id)?;

        let liked = self.session.toggle_liked(post_id);
        if liked {
            post.likes += 1;
        } else {
            post.likes = post.likes.saturating_sub(1);
        }

        tracing::debug!(post_id, liked, likes = post.likes, "like toggled");
        Some(liked)
    }

    /// Append a comment authored by the session user
    ///
    /// Comment order is append-order (chronological).
    ///
    /// # Returns
    /// The created comment, or None on anonymous session, missing post
    /// or empty trimmed text.
    pub fn add_comment(&mut self, post_id: PostId, text: &str) -> Option<Comment> {
        let author = self.session.user()?.clone();

        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.records.get_post(post_id)?;

        let id = self.records.next_comment_id();
        let comment = Comment {
            id,
            user: author,
            text: text.to_string(),
            timestamp: NOW_LABEL.to_string(),
            created_at: Utc::now(),
        };

        let post = self.records.get_post_mut(post_id)?;
        post.comments.push(comment.clone());

        tracing::debug!(post_id, comment_id = id, "comment added");
        Some(comment)
    }
}
