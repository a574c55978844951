//! Service-level tests: core services wired to the in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{AuthorSnapshot, NotificationKind, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    AuthError, BaseRepository, CommentRepository, FederatedProfile, NotificationRepository,
    PasswordService, PostRepository, UserRepository,
};
use quill_core::service::{
    AccountService, ConsistencyPropagator, ContentService, NotificationService, PasswordChange,
    ProfileUpdate, SubscriptionService,
};

use super::{
    InMemoryCommentRepository, InMemoryNotificationRepository, InMemoryPostRepository,
    InMemoryUserRepository,
};

/// Reversible stand-in for Argon2 so tests stay fast.
struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        if hash.is_empty() {
            return Err(AuthError::HashingError("empty hash".into()));
        }
        Ok(hash == format!("plain:{password}"))
    }
}

struct TestApp {
    users: Arc<InMemoryUserRepository>,
    posts: Arc<InMemoryPostRepository>,
    comments: Arc<InMemoryCommentRepository>,
    account: AccountService,
    subscriptions: SubscriptionService,
    content: ContentService,
    feed: NotificationService,
}

impl TestApp {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());
        let notifications = Arc::new(InMemoryNotificationRepository::new());

        let propagator = ConsistencyPropagator::new(
            posts.clone(),
            comments.clone(),
            notifications.clone(),
        );
        let account = AccountService::new(
            users.clone(),
            posts.clone(),
            comments.clone(),
            notifications.clone(),
            Arc::new(PlainPasswords),
            propagator,
        );
        let subscriptions = SubscriptionService::new(users.clone(), notifications.clone());
        let content = ContentService::new(
            users.clone(),
            posts.clone(),
            comments.clone(),
            notifications.clone(),
        );
        let feed = NotificationService::new(notifications.clone());

        Self {
            users,
            posts,
            comments,
            account,
            subscriptions,
            content,
            feed,
        }
    }

    async fn register(&self, email: &str, first: &str, last: &str) -> User {
        self.account
            .register(
                email.to_string(),
                "password-1234",
                first.to_string(),
                last.to_string(),
                chrono::NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            )
            .await
            .unwrap()
    }
}

fn stale() -> AuthorSnapshot {
    AuthorSnapshot {
        first_name: "Stale".into(),
        last_name: "Stale".into(),
        picture: "stale.png".into(),
    }
}

// --- registration / authentication ---

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("ada@example.com", "Ada", "Lovelace").await;

    let err = app
        .account
        .register(
            "ada@example.com".into(),
            "other-password",
            "Other".into(),
            "Person".into(),
            chrono::NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Duplicate(_)));
}

#[tokio::test]
async fn test_authenticate_paths() {
    let app = TestApp::new();
    let user = app.register("ada@example.com", "Ada", "Lovelace").await;

    let ok = app
        .account
        .authenticate("ada@example.com", "password-1234")
        .await
        .unwrap();
    assert_eq!(ok.id, user.id);

    let err = app
        .account
        .authenticate("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let err = app
        .account
        .authenticate("nobody@example.com", "password-1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFoundByKey(_)));
}

#[tokio::test]
async fn test_password_change_requires_current_secret() {
    let app = TestApp::new();
    let user = app.register("ada@example.com", "Ada", "Lovelace").await;

    let err = app
        .account
        .update_profile(
            user.id,
            ProfileUpdate {
                password_change: Some(PasswordChange {
                    current: "not-it".into(),
                    new: "new-password".into(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    app.account
        .update_profile(
            user.id,
            ProfileUpdate {
                password_change: Some(PasswordChange {
                    current: "password-1234".into(),
                    new: "new-password".into(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    app.account
        .authenticate("ada@example.com", "new-password")
        .await
        .unwrap();
}

// --- snapshot propagation ---

#[tokio::test]
async fn test_profile_edit_propagates_to_posts_comments_notifications() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;
    let bob = app.register("bob@example.com", "Bob", "Byrne").await;

    let ada_post = app
        .content
        .create_post(ada.id, "Title".into(), "body", None)
        .await
        .unwrap();
    let bob_post = app
        .content
        .create_post(bob.id, "Bob's".into(), "body", None)
        .await
        .unwrap();
    let ada_comment = app
        .content
        .add_comment(ada.id, bob_post.id, "nice".into())
        .await
        .unwrap();
    // Like emits a notification with Ada as sender.
    app.content.toggle_like(ada.id, bob_post.id).await.unwrap();

    app.account
        .update_profile(
            ada.id,
            ProfileUpdate {
                first_name: Some("Augusta".into()),
                picture: Some("https://cdn.example.com/new.png".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let post = app.posts.find_by_id(ada_post.id).await.unwrap().unwrap();
    assert_eq!(post.author.first_name, "Augusta");
    assert_eq!(post.author.picture, "https://cdn.example.com/new.png");

    let comment = app
        .comments
        .find_by_id(ada_comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(comment.author.first_name, "Augusta");

    let bob_feed = app.feed.list(bob.id).await.unwrap();
    let like = bob_feed
        .notifications
        .iter()
        .find(|n| n.kind == NotificationKind::Like)
        .unwrap();
    assert_eq!(like.sender.first_name, "Augusta");
    assert_eq!(like.sender.picture, "https://cdn.example.com/new.png");
}

#[tokio::test]
async fn test_bio_only_edit_does_not_propagate() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;
    let post = app
        .content
        .create_post(ada.id, "Title".into(), "body", None)
        .await
        .unwrap();

    // Plant a stale snapshot so an (unwanted) propagation would be visible.
    let mut planted = app.posts.find_by_id(post.id).await.unwrap().unwrap();
    planted.author = stale();
    app.posts.save(planted).await.unwrap();

    app.account
        .update_profile(
            ada.id,
            ProfileUpdate {
                bio: Some("all about me".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let post = app.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(post.author, stale(), "bio edit must not touch snapshots");
}

#[tokio::test]
async fn test_set_picture_propagates_unconditionally() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;
    let post = app
        .content
        .create_post(ada.id, "Title".into(), "body", None)
        .await
        .unwrap();

    let mut planted = app.posts.find_by_id(post.id).await.unwrap().unwrap();
    planted.author = stale();
    app.posts.save(planted).await.unwrap();

    app.account
        .set_picture(ada.id, "https://cdn.example.com/ada.png".into())
        .await
        .unwrap();

    let post = app.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(post.author.first_name, "Ada", "stale snapshot must heal");
    assert_eq!(post.author.picture, "https://cdn.example.com/ada.png");
}

// --- subscriptions ---

#[tokio::test]
async fn test_subscription_strict_toggle() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;
    let bob = app.register("bob@example.com", "Bob", "Byrne").await;

    let on = app.subscriptions.toggle(ada.id, bob.id).await.unwrap();
    assert!(on.subscribed);
    assert_eq!(on.subscriber_count, 1);

    let off = app.subscriptions.toggle(ada.id, bob.id).await.unwrap();
    assert!(!off.subscribed);
    assert_eq!(off.subscriber_count, 0);

    // Subscribe notified once; unsubscribe neither notifies nor retracts.
    let feed = app.feed.list(bob.id).await.unwrap();
    assert_eq!(feed.notifications.len(), 1);
    assert_eq!(feed.notifications[0].kind, NotificationKind::Subscribe);
    assert_eq!(feed.notifications[0].sender_id, ada.id);
}

#[tokio::test]
async fn test_self_subscription_rejected_without_state_change() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;

    let err = app.subscriptions.toggle(ada.id, ada.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let stored = app.users.find_by_id(ada.id).await.unwrap().unwrap();
    assert!(stored.subscribers.is_empty());
    assert!(app.feed.list(ada.id).await.unwrap().notifications.is_empty());
}

#[tokio::test]
async fn test_subscribe_to_missing_user_is_not_found() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;

    let err = app
        .subscriptions
        .toggle(ada.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// --- post creation fan-out and formatting ---

#[tokio::test]
async fn test_create_post_fans_out_to_each_subscriber_once() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let a = app.register("a@example.com", "Alice", "Ames").await;
    let b = app.register("b@example.com", "Bill", "Banks").await;
    app.subscriptions.toggle(a.id, author.id).await.unwrap();
    app.subscriptions.toggle(b.id, author.id).await.unwrap();

    let post = app
        .content
        .create_post(author.id, "Hello".into(), "**loud** and *soft*", None)
        .await
        .unwrap();

    assert_eq!(post.content, "<b>loud</b> and <i>soft</i>");
    assert_eq!(post.author.first_name, "Ada");

    for subscriber in [&a, &b] {
        let feed = app.feed.list(subscriber.id).await.unwrap();
        let created: Vec<_> = feed
            .notifications
            .iter()
            .filter(|n| n.kind == NotificationKind::PostCreated)
            .collect();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].post_id, Some(post.id));
        assert_eq!(created[0].sender_id, author.id);
    }

    let author_feed = app.feed.list(author.id).await.unwrap();
    assert!(
        author_feed
            .notifications
            .iter()
            .all(|n| n.kind != NotificationKind::PostCreated),
        "author must not be notified about their own post"
    );
}

// --- likes and comments ---

#[tokio::test]
async fn test_like_notifications_follow_self_rule_and_never_retract() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let reader = app.register("bob@example.com", "Bob", "Byrne").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "body", None)
        .await
        .unwrap();

    // Author liking their own post: state changes, no notification.
    let liked = app.content.toggle_like(author.id, post.id).await.unwrap();
    assert!(liked.liked_by(author.id));
    assert!(app.feed.list(author.id).await.unwrap().notifications.is_empty());

    // First like by a reader notifies; the un-like does not retract it.
    app.content.toggle_like(reader.id, post.id).await.unwrap();
    let after_unlike = app.content.toggle_like(reader.id, post.id).await.unwrap();
    assert!(!after_unlike.liked_by(reader.id));

    let feed = app.feed.list(author.id).await.unwrap();
    let likes: Vec<_> = feed
        .notifications
        .iter()
        .filter(|n| n.kind == NotificationKind::Like)
        .collect();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].sender_id, reader.id);
}

#[tokio::test]
async fn test_comment_notifies_post_author_unless_self() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let reader = app.register("bob@example.com", "Bob", "Byrne").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "body", None)
        .await
        .unwrap();

    app.content
        .add_comment(author.id, post.id, "first!".into())
        .await
        .unwrap();
    assert!(app.feed.list(author.id).await.unwrap().notifications.is_empty());

    app.content
        .add_comment(reader.id, post.id, "nice".into())
        .await
        .unwrap();
    let feed = app.feed.list(author.id).await.unwrap();
    assert_eq!(feed.notifications.len(), 1);
    assert_eq!(feed.notifications[0].kind, NotificationKind::Comment);
    assert_eq!(feed.notifications[0].post_id, Some(post.id));
}

#[tokio::test]
async fn test_comment_on_missing_post_is_not_found() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;

    let err = app
        .content
        .add_comment(ada.id, Uuid::new_v4(), "hello?".into())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// --- ownership checks ---

#[tokio::test]
async fn test_edit_and_delete_require_ownership() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let intruder = app.register("bob@example.com", "Bob", "Byrne").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "body", None)
        .await
        .unwrap();
    let comment = app
        .content
        .add_comment(author.id, post.id, "mine".into())
        .await
        .unwrap();

    let err = app
        .content
        .edit_post(intruder.id, post.id, Some("Hacked".into()), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let err = app
        .content
        .delete_post(intruder.id, post.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let err = app
        .content
        .delete_comment(intruder.id, comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_delete_post_removes_its_comments() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let reader = app.register("bob@example.com", "Bob", "Byrne").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "body", None)
        .await
        .unwrap();
    app.content
        .add_comment(reader.id, post.id, "outlive this".into())
        .await
        .unwrap();

    app.content.delete_post(author.id, post.id).await.unwrap();

    assert!(app.posts.find_by_id(post.id).await.unwrap().is_none());
    assert!(app.comments.find_by_post(post.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_posts_by_author_newest_first() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;

    let first = app
        .content
        .create_post(ada.id, "First".into(), "body", None)
        .await
        .unwrap();
    let second = app
        .content
        .create_post(ada.id, "Second".into(), "body", None)
        .await
        .unwrap();

    let listed = app.content.list_posts_by_author(ada.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn test_edit_post_rerenders_markup() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "plain", None)
        .await
        .unwrap();

    let edited = app
        .content
        .edit_post(author.id, post.id, None, Some("__now underlined__"), None)
        .await
        .unwrap();
    assert_eq!(edited.content, "<u>now underlined</u>");
}

// --- account deletion cascade ---

#[tokio::test]
async fn test_delete_account_leaves_no_dangling_references() {
    let app = TestApp::new();
    let victim = app.register("ada@example.com", "Ada", "Lovelace").await;
    let other = app.register("bob@example.com", "Bob", "Byrne").await;

    let victim_post = app
        .content
        .create_post(victim.id, "Mine".into(), "body", None)
        .await
        .unwrap();
    let other_post = app
        .content
        .create_post(other.id, "Theirs".into(), "body", None)
        .await
        .unwrap();

    // Cross activity in both directions.
    app.content
        .add_comment(other.id, victim_post.id, "on victim's post".into())
        .await
        .unwrap();
    app.content
        .add_comment(victim.id, other_post.id, "on other's post".into())
        .await
        .unwrap();
    app.content
        .toggle_like(other.id, victim_post.id)
        .await
        .unwrap();
    app.content
        .toggle_like(victim.id, other_post.id)
        .await
        .unwrap();
    app.subscriptions.toggle(victim.id, other.id).await.unwrap();
    app.subscriptions.toggle(other.id, victim.id).await.unwrap();

    app.account.delete_account(victim.id).await.unwrap();

    assert!(app.users.find_by_id(victim.id).await.unwrap().is_none());
    assert!(
        app.posts
            .find_by_author(victim.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        app.comments
            .find_by_post(victim_post.id)
            .await
            .unwrap()
            .is_empty(),
        "comments must not outlive the victim's post"
    );
    let surviving_comments = app.comments.find_by_post(other_post.id).await.unwrap();
    assert!(
        surviving_comments.iter().all(|c| c.author_id != victim.id),
        "victim's comments on surviving posts must be gone"
    );

    // No notification on either side references the victim.
    let other_feed = app.feed.list(other.id).await.unwrap();
    assert!(
        other_feed
            .notifications
            .iter()
            .all(|n| n.sender_id != victim.id)
    );
    assert!(app.feed.list(victim.id).await.unwrap().notifications.is_empty());

    let other = app.users.find_by_id(other.id).await.unwrap().unwrap();
    assert!(!other.subscribers.contains(&victim.id));

    // The survivor's own content is untouched.
    assert!(app.posts.find_by_id(other_post.id).await.unwrap().is_some());
}

/// Post store whose bulk author deletion always fails; everything else
/// delegates to the in-memory store.
struct BrokenPostDeletion(InMemoryPostRepository);

#[async_trait]
impl BaseRepository<Post, Uuid> for BrokenPostDeletion {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        self.0.save(entity).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.0.delete(id).await
    }
}

#[async_trait]
impl PostRepository for BrokenPostDeletion {
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        self.0.find_by_author(author_id).await
    }

    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        self.0.update_author_snapshot(author_id, snapshot).await
    }

    async fn delete_by_author(&self, _author_id: Uuid) -> Result<u64, RepoError> {
        Err(RepoError::Query("simulated outage".into()))
    }
}

#[tokio::test]
async fn test_cascade_continues_past_failing_step() {
    let users = Arc::new(InMemoryUserRepository::new());
    let posts = Arc::new(BrokenPostDeletion(InMemoryPostRepository::new()));
    let comments = Arc::new(InMemoryCommentRepository::new());
    let notifications = Arc::new(InMemoryNotificationRepository::new());

    let propagator =
        ConsistencyPropagator::new(posts.clone(), comments.clone(), notifications.clone());
    let account = AccountService::new(
        users.clone(),
        posts.clone(),
        comments.clone(),
        notifications.clone(),
        Arc::new(PlainPasswords),
        propagator,
    );
    let subscriptions = SubscriptionService::new(users.clone(), notifications.clone());
    let content = ContentService::new(
        users.clone(),
        posts.clone(),
        comments.clone(),
        notifications.clone(),
    );

    let victim = account
        .register(
            "ada@example.com".into(),
            "password-1234",
            "Ada".into(),
            "Lovelace".into(),
            chrono::NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        )
        .await
        .unwrap();
    let other = account
        .register(
            "bob@example.com".into(),
            "password-1234",
            "Bob".into(),
            "Byrne".into(),
            chrono::NaiveDate::from_ymd_opt(1988, 2, 2).unwrap(),
        )
        .await
        .unwrap();
    content
        .create_post(victim.id, "Sticky".into(), "body", None)
        .await
        .unwrap();
    subscriptions.toggle(victim.id, other.id).await.unwrap();

    // Post deletion fails, but the rest of the cascade still runs.
    account.delete_account(victim.id).await.unwrap();

    assert!(users.find_by_id(victim.id).await.unwrap().is_none());
    assert!(
        notifications
            .find_by_recipient(other.id)
            .await
            .unwrap()
            .is_empty()
    );
    let other = users.find_by_id(other.id).await.unwrap().unwrap();
    assert!(!other.subscribers.contains(&victim.id));
    // The orphaned post is the accepted cost of best-effort deletion.
    assert_eq!(posts.find_by_author(victim.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_account_is_not_found() {
    let app = TestApp::new();
    let err = app.account.delete_account(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// --- notification feed ---

#[tokio::test]
async fn test_feed_orders_newest_first_and_counts_unread() {
    let app = TestApp::new();
    let author = app.register("ada@example.com", "Ada", "Lovelace").await;
    let reader = app.register("bob@example.com", "Bob", "Byrne").await;
    let post = app
        .content
        .create_post(author.id, "Title".into(), "body", None)
        .await
        .unwrap();

    app.content.toggle_like(reader.id, post.id).await.unwrap();
    app.content
        .add_comment(reader.id, post.id, "then this".into())
        .await
        .unwrap();

    let feed = app.feed.list(author.id).await.unwrap();
    assert_eq!(feed.notifications.len(), 2);
    assert_eq!(feed.unread_count, 2);
    assert_eq!(feed.notifications[0].kind, NotificationKind::Comment);
    assert_eq!(feed.notifications[1].kind, NotificationKind::Like);

    let touched = app.feed.mark_all_read(author.id).await.unwrap();
    assert_eq!(touched, 2);
    let feed = app.feed.list(author.id).await.unwrap();
    assert_eq!(feed.unread_count, 0);
    assert_eq!(feed.notifications.len(), 2, "read notifications remain");
}

// --- federated login ---

#[tokio::test]
async fn test_federated_login_creates_account_without_usable_secret() {
    let app = TestApp::new();
    let user = app
        .account
        .federated_login(FederatedProfile {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            picture: "https://idp.example.com/ada.png".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.picture, "https://idp.example.com/ada.png");
    assert!(user.date_of_birth.is_none());

    let err = app
        .account
        .authenticate("ada@example.com", "")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_federated_login_refreshes_snapshot_and_propagates() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;
    let post = app
        .content
        .create_post(ada.id, "Title".into(), "body", None)
        .await
        .unwrap();

    app.account
        .federated_login(FederatedProfile {
            email: "ada@example.com".into(),
            first_name: "Augusta".into(),
            last_name: "King".into(),
            picture: "https://idp.example.com/new.png".into(),
        })
        .await
        .unwrap();

    let post = app.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(post.author.first_name, "Augusta");
    assert_eq!(post.author.last_name, "King");
    assert_eq!(post.author.picture, "https://idp.example.com/new.png");
}

// --- store basics ---

#[tokio::test]
async fn test_memory_store_lookup_and_delete() {
    let app = TestApp::new();
    let ada = app.register("ada@example.com", "Ada", "Lovelace").await;

    let found = app.users.find_by_email("ada@example.com").await.unwrap();
    assert_eq!(found.unwrap().id, ada.id);
    assert!(app.users.find_by_email("nope").await.unwrap().is_none());

    app.users.delete(ada.id).await.unwrap();
    assert!(matches!(
        app.users.delete(ada.id).await.unwrap_err(),
        RepoError::NotFound
    ));
}
