//! Stylati - an in-memory domain state store for a single-session
//! social marketplace feed
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  View Layer (out of scope)                  │
//! │  - renders whatever the store currently holds               │
//! │  - forwards user intents into the operation surface         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                           │
//! │  - auth / posts / messaging / profile / feed                │
//! │  - preconditions, silent no-ops, counter upkeep             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                             │
//! │  - in-memory collections + id sequences                     │
//! │  - seed fixture (built-in or JSON file)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `service`: domain operations grouped per concern
//! - `data`: collections, models, session, seed fixture
//! - `config`: configuration management
//! - `logging`: tracing-subscriber setup for embedders
//! - `error`: error types (construction only)
//!
//! # Error policy
//!
//! Operations are total over their inputs: an unmet precondition (no
//! active session, non-owner delete, empty text, unknown id) returns
//! `false`/`None` and leaves the state unchanged. [`error::AppError`]
//! only appears while loading configuration and seed data.

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod service;

use config::AppConfig;
use data::{Records, SeedData, Session};
use error::AppError;
use service::{AuthService, FeedService, MessagingService, PostService, ProfileService};

/// The domain state store
///
/// Owns the authoritative collections and the single session, and hands
/// out per-concern service views. Constructed once per process and
/// passed by reference to the view layer; all operations are synchronous
/// and apply as atomic state transitions.
#[derive(Debug)]
pub struct Store {
    config: AppConfig,
    records: Records,
    session: Session,
}

impl Store {
    /// Initialize the store from configuration
    ///
    /// # Steps
    /// 1. Validate configuration
    /// 2. Load the seed fixture (JSON file or built-in)
    /// 3. Validate the fixture and build the collections
    ///
    /// # Errors
    /// Returns error if any initialization step fails
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        tracing::info!(instance = %config.instance.title, "Initializing store...");
        config.validate()?;

        let seed = match &config.seed.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed fixture from file");
                SeedData::from_path(path)?
            }
            None => SeedData::builtin(),
        };

        Self::with_seed(config, seed)
    }

    /// Initialize the store from an explicit fixture
    pub fn with_seed(config: AppConfig, seed: SeedData) -> Result<Self, AppError> {
        config.validate()?;
        let records = Records::from_seed(seed)?;

        tracing::info!(
            users = records.users().len(),
            posts = records.posts().len(),
            conversations = records.conversations().len(),
            "Store initialized"
        );

        Ok(Self {
            config,
            records,
            session: Session::default(),
        })
    }

    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The current session (read-only)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Login, sign-up and logout
    pub fn auth(&mut self) -> AuthService<'_> {
        AuthService::new(&mut self.records, &mut self.session, &self.config)
    }

    /// Publish, delete, like and comment
    pub fn posts(&mut self) -> PostService<'_> {
        PostService::new(&mut self.records, &mut self.session)
    }

    /// Direct-message threads
    pub fn messaging(&mut self) -> MessagingService<'_> {
        MessagingService::new(&mut self.records, &mut self.session)
    }

    /// Profile edits
    pub fn profile(&mut self) -> ProfileService<'_> {
        ProfileService::new(&mut self.records, &mut self.session)
    }

    /// Read-only queries
    pub fn feed(&self) -> FeedService<'_> {
        FeedService::new(&self.records, &self.session)
    }
}
