//! Feed mutation tests: publish, delete, like, comment

mod common;

use common::{seeded_store, store_as_sara};

#[test]
fn test_create_post_prepends_and_bumps_posts_count() {
    let mut store = store_as_sara();

    let post = store
        .posts()
        .create(
            "جاكيت جلد أسود، مقاس متوسط.",
            "https://example.com/jacket.jpg",
            Some(200.0),
            Some("Mango".to_string()),
            None,
        )
        .unwrap();

    assert_eq!(post.id, 4);
    assert_eq!(store.feed().home()[0].id, 4);
    assert_eq!(store.feed().home().len(), 4);
    assert_eq!(store.feed().user(1).unwrap().posts_count, 2);
    assert_eq!(store.session().user().unwrap().posts_count, 2);
}

#[test]
fn test_create_post_requires_session_and_description() {
    let mut store = seeded_store();
    assert!(
        store
            .posts()
            .create("وصف", "https://example.com/a.jpg", None, None, None)
            .is_none()
    );

    let mut store = store_as_sara();
    assert!(
        store
            .posts()
            .create("   ", "https://example.com/a.jpg", None, None, None)
            .is_none()
    );
    assert_eq!(store.feed().home().len(), 3);
}

#[test]
fn test_delete_own_post_after_confirmation() {
    let mut store = store_as_sara();

    // Post 3 is sara's seed post.
    assert!(store.posts().request_delete(3));
    assert!(store.posts().resolve_delete(3, true));

    assert!(store.feed().post(3).is_none());
    assert_eq!(store.feed().home().len(), 2);
    assert_eq!(store.feed().user(1).unwrap().posts_count, 0);
    assert_eq!(store.session().user().unwrap().posts_count, 0);
}

#[test]
fn test_declined_delete_leaves_feed_unchanged() {
    let mut store = store_as_sara();

    assert!(store.posts().request_delete(3));
    assert!(!store.posts().resolve_delete(3, false));

    assert!(store.feed().post(3).is_some());
    assert_eq!(store.feed().home().len(), 3);
    assert_eq!(store.feed().user(1).unwrap().posts_count, 1);

    // The declined confirmation is spent; confirming later changes nothing.
    assert!(!store.posts().resolve_delete(3, true));
    assert_eq!(store.feed().home().len(), 3);
}

#[test]
fn test_delete_of_foreign_post_is_rejected() {
    let mut store = store_as_sara();

    // Post 1 belongs to noor_closet.
    assert!(!store.posts().request_delete(1));
    assert!(!store.posts().resolve_delete(1, true));
    assert_eq!(store.feed().home().len(), 3);
    assert_eq!(store.feed().user(3).unwrap().posts_count, 1);
}

#[test]
fn test_post_ids_are_not_reused_after_delete() {
    let mut store = store_as_sara();

    let first = store
        .posts()
        .create("منشور مؤقت", "https://example.com/t.jpg", None, None, None)
        .unwrap();
    assert_eq!(first.id, 4);

    assert!(store.posts().request_delete(first.id));
    assert!(store.posts().resolve_delete(first.id, true));

    let second = store
        .posts()
        .create("منشور جديد", "https://example.com/n.jpg", None, None, None)
        .unwrap();
    assert_eq!(second.id, 5);
}

#[test]
fn test_toggle_like_adjusts_counter_and_set() {
    let mut store = store_as_sara();

    assert_eq!(store.posts().toggle_like(1), Some(true));
    assert_eq!(store.feed().post(1).unwrap().likes, 153);
    assert!(store.feed().is_liked(1));

    // The aggregate counter never moves by more than one per toggle.
    assert_eq!(store.posts().toggle_like(1), Some(false));
    assert_eq!(store.feed().post(1).unwrap().likes, 152);
    assert!(!store.feed().is_liked(1));
}

#[test]
fn test_deleting_a_liked_post_clears_the_like() {
    let mut store = store_as_sara();

    assert_eq!(store.posts().toggle_like(3), Some(true));
    assert!(store.posts().request_delete(3));
    assert!(store.posts().resolve_delete(3, true));

    assert!(!store.session().likes(3));
}

#[test]
fn test_add_comment_appends_in_order() {
    let mut store = store_as_sara();

    let before = store.feed().post(1).unwrap().comments.len();
    let comment = store.posts().add_comment(1, "  تنسيق رائع  ").unwrap();

    let feed = store.feed();
    let post = feed.post(1).unwrap();
    assert_eq!(post.comments.len(), before + 1);
    assert_eq!(post.comments.last().unwrap().id, comment.id);
    assert_eq!(comment.user.id, 1);
    assert_eq!(comment.text, "تنسيق رائع");
}

#[test]
fn test_add_comment_rejects_blank_text_and_unknown_post() {
    let mut store = store_as_sara();

    assert!(store.posts().add_comment(1, "   ").is_none());
    assert!(store.posts().add_comment(42, "مرحبا").is_none());
    assert_eq!(store.feed().post(1).unwrap().comments.len(), 2);
}
