//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{
    CommentRepository, FederatedIdentityVerifier, GrammarService, MediaStore,
    NotificationRepository, PasswordService, PostRepository, UserRepository,
};
use quill_core::service::{
    AccountService, ConsistencyPropagator, ContentService, NotificationService,
    SubscriptionService,
};
use quill_infra::{
    Argon2PasswordService, HttpGrammarClient, HttpMediaStore, InMemoryCommentRepository,
    InMemoryNotificationRepository, InMemoryPostRepository, InMemoryUserRepository,
    NoopGrammarClient, OidcUserinfoVerifier,
};

#[cfg(feature = "postgres")]
use quill_infra::{
    DatabaseConnections, PostgresCommentRepository, PostgresNotificationRepository,
    PostgresPostRepository, PostgresUserRepository,
};

use crate::config::AppConfig;

struct Stores {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl Stores {
    fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            notifications: Arc::new(InMemoryNotificationRepository::new()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub account: AccountService,
    pub subscriptions: SubscriptionService,
    pub content: ContentService,
    pub feed: NotificationService,
    pub media: Option<Arc<dyn MediaStore>>,
    pub grammar: Arc<dyn GrammarService>,
    pub federation: Option<Arc<dyn FederatedIdentityVerifier>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let stores = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => Stores {
                    users: Arc::new(PostgresUserRepository::new(connections.main.clone())),
                    posts: Arc::new(PostgresPostRepository::new(connections.main.clone())),
                    comments: Arc::new(PostgresCommentRepository::new(connections.main.clone())),
                    notifications: Arc::new(PostgresNotificationRepository::new(
                        connections.main.clone(),
                    )),
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Stores::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Stores::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let stores = {
            tracing::info!("Running without postgres feature - using in-memory stores");
            Stores::in_memory()
        };

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let propagator = ConsistencyPropagator::new(
            stores.posts.clone(),
            stores.comments.clone(),
            stores.notifications.clone(),
        );

        let media: Option<Arc<dyn MediaStore>> = config
            .media_base_url
            .clone()
            .map(|url| Arc::new(HttpMediaStore::new(url)) as Arc<dyn MediaStore>);
        if media.is_none() {
            tracing::warn!("MEDIA_BASE_URL not set. Picture uploads are disabled.");
        }

        let grammar: Arc<dyn GrammarService> = match config.grammar_base_url.clone() {
            Some(url) => Arc::new(HttpGrammarClient::new(url)),
            None => {
                tracing::warn!("GRAMMAR_BASE_URL not set. Grammar checks return no suggestions.");
                Arc::new(NoopGrammarClient)
            }
        };

        let federation: Option<Arc<dyn FederatedIdentityVerifier>> = config
            .federation_userinfo_url
            .clone()
            .map(|url| Arc::new(OidcUserinfoVerifier::new(url)) as Arc<dyn FederatedIdentityVerifier>);
        if federation.is_none() {
            tracing::warn!("FEDERATION_USERINFO_URL not set. Federated login is disabled.");
        }

        tracing::info!("Application state initialized");

        Self {
            account: AccountService::new(
                stores.users.clone(),
                stores.posts.clone(),
                stores.comments.clone(),
                stores.notifications.clone(),
                passwords,
                propagator,
            ),
            subscriptions: SubscriptionService::new(
                stores.users.clone(),
                stores.notifications.clone(),
            ),
            content: ContentService::new(
                stores.users,
                stores.posts,
                stores.comments,
                stores.notifications.clone(),
            ),
            feed: NotificationService::new(stores.notifications),
            media,
            grammar,
            federation,
        }
    }
}
