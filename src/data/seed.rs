//! Seed fixture
//!
//! The store is populated at construction from a `SeedData` fixture
//! standing in for the persistence layer this crate excludes: three
//! users, three posts (one with comments pre-populated) and one
//! conversation with two messages. A deployment can replace the built-in
//! fixture with a JSON file via `seed.path` in the configuration.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Duration, Utc};

use super::models::{Comment, Conversation, Message, Post, User};
use crate::error::AppError;

/// Initial contents of the store
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SeedData {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub conversations: Vec<Conversation>,
}

impl SeedData {
    /// The built-in fixture
    ///
    /// Timestamps are backdated relative to load time so the display
    /// labels stay truthful ("منذ 2 ساعة" really is two hours back).
    pub fn builtin() -> Self {
        let now = Utc::now();
        let sara = User {
            id: 1,
            username: "sara_fashion".to_string(),
            password: "password123".to_string(),
            full_name: "سارة عبدالله".to_string(),
            avatar_url: "https://picsum.photos/id/1027/200/200".to_string(),
            bio: "أحب الموضة والأناقة ✨ أشارككم تنسيقاتي اليومية.".to_string(),
            followers: 1250,
            following: 320,
            posts_count: 1,
            instagram: Some("sara.fashion".to_string()),
            twitter: Some("sara_tweets".to_string()),
            website: Some("sara-styles.com".to_string()),
            created_at: now - Duration::days(90),
        };
        let ahmed = User {
            id: 2,
            username: "ahmed_style".to_string(),
            password: "password123".to_string(),
            full_name: "أحمد خالد".to_string(),
            avatar_url: "https://picsum.photos/id/1005/200/200".to_string(),
            bio: "مستشار مظهر | مهتم بأزياء الرجال.".to_string(),
            followers: 850,
            following: 150,
            posts_count: 1,
            instagram: Some("ahmedstyle".to_string()),
            twitter: None,
            website: None,
            created_at: now - Duration::days(60),
        };
        let noor = User {
            id: 3,
            username: "noor_closet".to_string(),
            password: "password123".to_string(),
            full_name: "نور علي".to_string(),
            avatar_url: "https://picsum.photos/id/1011/200/200".to_string(),
            bio: "خزانتي للبيع 🛍️ قطع فريدة بأسعار مميزة.".to_string(),
            followers: 2300,
            following: 500,
            posts_count: 1,
            instagram: None,
            twitter: None,
            website: None,
            created_at: now - Duration::days(45),
        };

        let posts = vec![
            Post {
                id: 1,
                user: noor.clone(),
                image_url: "https://picsum.photos/id/21/600/800".to_string(),
                description: "فستان سهرة أنيق باللون الأحمر، جديد لم يستخدم. مثالي للمناسبات الخاصة."
                    .to_string(),
                price: Some(350.0),
                brand: Some("مصمم محلي".to_string()),
                category: Some("فساتين".to_string()),
                likes: 152,
                comments: vec![
                    Comment {
                        id: 1,
                        user: ahmed.clone(),
                        text: "قطعة جميلة جداً!".to_string(),
                        timestamp: "منذ 5 دقائق".to_string(),
                        created_at: now - Duration::minutes(5),
                    },
                    Comment {
                        id: 2,
                        user: noor.clone(),
                        text: "كم السعر؟".to_string(),
                        timestamp: "منذ 10 دقائق".to_string(),
                        created_at: now - Duration::minutes(10),
                    },
                ],
                timestamp: "منذ 2 ساعة".to_string(),
                created_at: now - Duration::hours(2),
            },
            Post {
                id: 2,
                user: ahmed.clone(),
                image_url: "https://picsum.photos/id/180/600/800".to_string(),
                description: "تنسيق كاجوال ليوم عمل. سترة من زارا وبنطلون من ماسيمو دوتي."
                    .to_string(),
                price: None,
                brand: Some("Zara".to_string()),
                category: Some("ملابس رجالية".to_string()),
                likes: 98,
                comments: vec![Comment {
                    id: 3,
                    user: sara.clone(),
                    text: "أنيق!".to_string(),
                    timestamp: "منذ ساعة".to_string(),
                    created_at: now - Duration::hours(1),
                }],
                timestamp: "منذ 5 ساعة".to_string(),
                created_at: now - Duration::hours(5),
            },
            Post {
                id: 3,
                user: sara.clone(),
                image_url: "https://picsum.photos/id/327/600/800".to_string(),
                description: "حقيبة يد من الجلد الطبيعي باللون البيج. استعمال خفيف جداً، حالتها ممتازة."
                    .to_string(),
                price: Some(450.0),
                brand: Some("Michael Kors".to_string()),
                category: Some("حقائب".to_string()),
                likes: 230,
                comments: Vec::new(),
                timestamp: "منذ يوم".to_string(),
                created_at: now - Duration::days(1),
            },
        ];

        let conversations = vec![Conversation {
            id: 1,
            user: noor.clone(),
            messages: vec![
                Message {
                    id: 1,
                    sender_id: 3,
                    text: "مرحبا، هل الفستان الأحمر مازال متوفر؟".to_string(),
                    timestamp: "10:30 ص".to_string(),
                    created_at: now - Duration::minutes(40),
                },
                Message {
                    id: 2,
                    sender_id: 1,
                    text: "أهلاً بك، نعم مازال متوفر.".to_string(),
                    timestamp: "10:32 ص".to_string(),
                    created_at: now - Duration::minutes(38),
                },
            ],
        }];

        Self {
            users: vec![sara, ahmed, noor],
            posts,
            conversations,
        }
    }

    /// Load a fixture from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Seed(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        let seed: Self = serde_json::from_str(&raw)?;
        Ok(seed)
    }

    /// Check the fixture against the store invariants
    ///
    /// # Errors
    /// Returns `AppError::Seed` on the first violation found.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut usernames = HashSet::new();
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(AppError::Seed(format!("duplicate user id {}", user.id)));
            }
            if !usernames.insert(user.username.to_lowercase()) {
                return Err(AppError::Seed(format!(
                    "duplicate username (case-insensitive): {}",
                    user.username
                )));
            }
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.id) {
                return Err(AppError::Seed(format!("duplicate post id {}", post.id)));
            }
            if !user_ids.contains(&post.user.id) {
                return Err(AppError::Seed(format!(
                    "post {} is owned by unknown user {}",
                    post.id, post.user.id
                )));
            }
            for comment in &post.comments {
                if !user_ids.contains(&comment.user.id) {
                    return Err(AppError::Seed(format!(
                        "comment {} on post {} has unknown author {}",
                        comment.id, post.id, comment.user.id
                    )));
                }
            }
        }

        for user in &self.users {
            let owned = self.posts.iter().filter(|p| p.user.id == user.id).count();
            if owned as u32 != user.posts_count {
                return Err(AppError::Seed(format!(
                    "posts_count for {} is {} but the fixture holds {} owned posts",
                    user.username, user.posts_count, owned
                )));
            }
        }

        let mut conversation_ids = HashSet::new();
        for conversation in &self.conversations {
            if !conversation_ids.insert(conversation.id) {
                return Err(AppError::Seed(format!(
                    "duplicate conversation id {}",
                    conversation.id
                )));
            }
            if !user_ids.contains(&conversation.user.id) {
                return Err(AppError::Seed(format!(
                    "conversation {} has unknown counterpart {}",
                    conversation.id, conversation.user.id
                )));
            }
            for message in &conversation.messages {
                if !user_ids.contains(&message.sender_id) {
                    return Err(AppError::Seed(format!(
                        "message {} in conversation {} has unknown sender {}",
                        message.id, conversation.id, message.sender_id
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_fixture_is_valid() {
        let seed = SeedData::builtin();
        seed.validate().unwrap();
        assert_eq!(seed.users.len(), 3);
        assert_eq!(seed.posts.len(), 3);
        assert_eq!(seed.conversations.len(), 1);
        assert_eq!(seed.posts[0].comments.len(), 2);
        assert_eq!(seed.conversations[0].messages.len(), 2);
    }

    #[test]
    fn validate_rejects_case_insensitive_username_collision() {
        let mut seed = SeedData::builtin();
        seed.users[1].username = "SARA_FASHION".to_string();
        // Keep posts_count consistent so the username check is what trips.
        let error = seed.validate().unwrap_err();
        assert!(matches!(error, AppError::Seed(message) if message.contains("username")));
    }

    #[test]
    fn validate_rejects_posts_count_mismatch() {
        let mut seed = SeedData::builtin();
        seed.users[0].posts_count = 7;
        let error = seed.validate().unwrap_err();
        assert!(matches!(error, AppError::Seed(message) if message.contains("posts_count")));
    }

    #[test]
    fn validate_rejects_unknown_post_owner() {
        let mut seed = SeedData::builtin();
        seed.posts[0].user.id = 99;
        let error = seed.validate().unwrap_err();
        assert!(matches!(error, AppError::Seed(message) if message.contains("unknown user")));
    }

    #[test]
    fn fixture_roundtrips_through_json_file() {
        let seed = SeedData::builtin();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, serde_json::to_string(&seed).unwrap()).unwrap();

        let loaded = SeedData::from_path(&path).unwrap();
        assert_eq!(loaded.users, seed.users);
        assert_eq!(loaded.posts, seed.posts);
        assert_eq!(loaded.conversations, seed.conversations);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let error = SeedData::from_path(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(error, AppError::Seed(message) if message.contains("cannot read")));
    }
}
