//! Session lifecycle tests: login, sign-up, logout

mod common;

use common::{seeded_store, store_as_sara};

#[test]
fn test_login_is_username_case_insensitive() {
    let mut store = seeded_store();

    assert!(store.auth().login("SARA_FASHION", "password123"));
    assert_eq!(store.session().user().unwrap().username, "sara_fashion");
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut store = seeded_store();

    assert!(!store.auth().login("sara_fashion", "wrong"));
    assert!(!store.session().is_authenticated());
}

#[test]
fn test_sign_up_then_login_roundtrip() {
    let mut store = seeded_store();

    assert!(store.auth().sign_up("ليلى حسن", "layla_trends", "s3cret"));
    assert!(store.session().is_authenticated());

    store.auth().logout();
    assert!(!store.session().is_authenticated());

    assert!(store.auth().login("layla_trends", "s3cret"));
    assert_eq!(store.session().user().unwrap().full_name, "ليلى حسن");
}

#[test]
fn test_sign_up_logs_the_new_user_in_with_defaults() {
    let mut store = seeded_store();

    assert!(store.auth().sign_up("ليلى حسن", "layla_trends", "s3cret"));

    let user = store.session().user().unwrap().clone();
    assert_eq!(user.id, 4);
    assert_eq!(user.followers, 0);
    assert_eq!(user.following, 0);
    assert_eq!(user.posts_count, 0);
    assert_eq!(user.bio, "مرحباً! أنا عضو جديد في ستايلاتي.");
    assert_eq!(user.avatar_url, "https://picsum.photos/seed/4/200/200");
    assert_eq!(store.feed().users().len(), 4);
}

#[test]
fn test_sign_up_rejects_username_differing_only_in_case() {
    let mut store = seeded_store();

    assert!(!store.auth().sign_up("منتحلة", "Sara_Fashion", "s3cret"));

    // Users collection is unchanged and nobody got logged in.
    assert_eq!(store.feed().users().len(), 3);
    assert_eq!(
        store.feed().find_user_by_username("sara_fashion").unwrap().id,
        1
    );
    assert!(!store.session().is_authenticated());
}

#[test]
fn test_logout_preserves_collections_and_liked_set() {
    let mut store = store_as_sara();

    assert_eq!(store.posts().toggle_like(1), Some(true));
    store.auth().logout();

    assert!(!store.session().is_authenticated());
    assert_eq!(store.feed().home().len(), 3);
    // The liked set belongs to the viewer and survives logout.
    assert!(store.session().likes(1));
}

#[test]
fn test_logout_cancels_pending_delete() {
    let mut store = store_as_sara();

    assert!(store.posts().request_delete(3));
    store.auth().logout();
    assert!(store.auth().login("sara_fashion", "password123"));

    // The confirmation from before the logout no longer applies.
    assert!(!store.posts().resolve_delete(3, true));
    assert_eq!(store.feed().home().len(), 3);
}
