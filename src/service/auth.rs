//! Authentication service
//!
//! Handles the session lifecycle: login, sign-up, logout. This is mock
//! authentication over the in-memory users collection; passwords are
//! opaque strings compared case-sensitively, usernames are matched
//! case-insensitively.

use chrono::Utc;

use crate::config::AppConfig;
use crate::data::{Records, Session, User};

/// Authentication service
pub struct AuthService<'a> {
    records: &'a mut Records,
    session: &'a mut Session,
    config: &'a AppConfig,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(
        records: &'a mut Records,
        session: &'a mut Session,
        config: &'a AppConfig,
    ) -> Self {
        Self {
            records,
            session,
            config,
        }
    }

    /// Authenticate the session
    ///
    /// Username lookup is case-insensitive; the password must match
    /// exactly. On success the user is cached in the session.
    ///
    /// # Returns
    /// false on unknown username or wrong password
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let Some(user) = self.records.find_user_by_username(username) else {
            tracing::debug!(username, "login rejected: unknown username");
            return false;
        };
        if user.password != password {
            tracing::debug!(username = %user.username, "login rejected: wrong password");
            return false;
        }

        let user = user.clone();
        tracing::info!(user_id = user.id, username = %user.username, "session authenticated");
        self.session.authenticate(user);
        true
    }

    /// Create a new user and log them in immediately
    ///
    /// The new profile gets zeroed counters plus the configured default
    /// bio and rendered avatar template. Field presence is a caller-side
    /// concern; the single declared failure mode is a username collision.
    ///
    /// # Returns
    /// false on a case-insensitive username collision (users unchanged)
    pub fn sign_up(&mut self, full_name: &str, username: &str, password: &str) -> bool {
        let full_name = full_name.trim();
        let username = username.trim();
        if full_name.is_empty() || username.is_empty() || password.is_empty() {
            return false;
        }

        if self.records.find_user_by_username(username).is_some() {
            tracing::debug!(username, "sign-up rejected: username taken");
            return false;
        }

        let id = self.records.next_user_id();
        let user = User {
            id,
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            avatar_url: self.config.profile.avatar_url_for(id),
            bio: self.config.profile.default_bio.clone(),
            followers: 0,
            following: 0,
            posts_count: 0,
            instagram: None,
            twitter: None,
            website: None,
            created_at: Utc::now(),
        };

        tracing::info!(user_id = user.id, username = %user.username, "user signed up");
        self.records.insert_user(user.clone());
        self.session.authenticate(user);
        true
    }

    /// End the session
    ///
    /// Clears the authenticated user; collections and the liked set are
    /// untouched.
    pub fn logout(&mut self) {
        if let Some(user_id) = self.session.user_id() {
            tracing::info!(user_id, "session ended");
        }
        self.session.clear();
    }
}
