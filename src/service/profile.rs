//! Profile service
//!
//! Handles profile edits for the session user. Posts embed a snapshot of
//! their owner, so an accepted edit fans the new identity out to every
//! owned post; comment snapshots deliberately keep the identity they were
//! written under.

use crate::data::{Records, Session, User};

/// Profile service
pub struct ProfileService<'a> {
    records: &'a mut Records,
    session: &'a mut Session,
}

impl<'a> ProfileService<'a> {
    pub(crate) fn new(records: &'a mut Records, session: &'a mut Session) -> Self {
        Self { records, session }
    }

    /// Replace the session user's profile
    ///
    /// The username is immutable through this path: whatever the caller
    /// supplies, the stored username is kept. The accepted record
    /// replaces the entry in the users collection, the owner snapshot on
    /// every owned post, and the session's cached identity.
    ///
    /// # Returns
    /// The applied record, or None when the input id is not the session
    /// user's (state unchanged).
    pub fn update(&mut self, mut updated: User) -> Option<User> {
        let current = self.session.user()?.clone();
        if updated.id != current.id {
            tracing::debug!(
                user_id = updated.id,
                session_user = current.id,
                "profile update rejected: not the session user"
            );
            return None;
        }

        updated.username = current.username;

        if !self.records.update_user(updated.clone()) {
            return None;
        }
        let rewritten = self.records.rewrite_post_owner(&updated);
        if let Some(cached) = self.session.user_mut() {
            *cached = updated.clone();
        }

        tracing::info!(
            user_id = updated.id,
            posts_rewritten = rewritten,
            "profile updated"
        );
        Some(updated)
    }
}
