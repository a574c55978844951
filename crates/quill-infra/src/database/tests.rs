#[cfg(test)]
mod tests {
    use crate::database::entity::{notification, post};
    use crate::database::postgres_repo::{
        PostgresNotificationRepository, PostgresPostRepository,
    };
    use quill_core::domain::{AuthorSnapshot, Notification, NotificationKind, Post};
    use quill_core::ports::BaseRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_post_by_id_maps_snapshot_columns() {
        let post_id = uuid::Uuid::new_v4();
        let author_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                author_id,
                title: "Test Post".to_owned(),
                content: "<b>Content</b>".to_owned(),
                author_first_name: "Ada".to_owned(),
                author_last_name: "Lovelace".to_owned(),
                author_picture: "pic.png".to_owned(),
                likes: serde_json::json!([]),
                image: None,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.author.first_name, "Ada");
        assert_eq!(post.author.picture, "pic.png");
        assert!(post.likes.is_empty());
    }

    #[tokio::test]
    async fn test_save_new_post_issues_insert_with_upsert() {
        // Ids are minted by the domain, so a fresh entity already carries its
        // primary key; save must still INSERT, not UPDATE a nonexistent row.
        let post = Post::new(
            uuid::Uuid::new_v4(),
            "Fresh".to_owned(),
            "<b>hi</b>".to_owned(),
            AuthorSnapshot {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                picture: String::new(),
            },
            None,
        );
        let returned = post::Model {
            id: post.id,
            author_id: post.author_id,
            title: post.title.clone(),
            content: post.content.clone(),
            author_first_name: post.author.first_name.clone(),
            author_last_name: post.author.last_name.clone(),
            author_picture: post.author.picture.clone(),
            likes: serde_json::json!([]),
            image: None,
            created_at: post.created_at.into(),
            updated_at: post.updated_at.into(),
        };

        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![returned]])
            .into_connection();
        // `DatabaseConnection` does not derive `Clone` when the `mock` feature
        // is on; share the Arc-backed mock handle manually so the transaction
        // log stays inspectable after the repo takes its copy.
        let repo_conn = match &conn {
            sea_orm::DatabaseConnection::MockDatabaseConnection(inner) => {
                sea_orm::DatabaseConnection::MockDatabaseConnection(inner.clone())
            }
            _ => unreachable!("MockDatabase always yields a mock connection"),
        };
        let repo = PostgresPostRepository::new(repo_conn);

        let saved: Post = repo.save(post).await.unwrap();
        assert_eq!(saved.title, "Fresh");

        let log = format!("{:?}", conn.into_transaction_log());
        assert!(
            log.contains("INSERT INTO \"posts\""),
            "new rows must insert: {log}"
        );
        assert!(
            log.contains("ON CONFLICT"),
            "resaved rows must upsert in place: {log}"
        );
        assert!(
            !log.contains("UPDATE \"posts\""),
            "save must not update a row that does not exist yet: {log}"
        );
    }

    #[tokio::test]
    async fn test_find_notification_parses_kind() {
        let id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![notification::Model {
                id,
                recipient_id: uuid::Uuid::new_v4(),
                sender_id: uuid::Uuid::new_v4(),
                sender_first_name: "Ada".to_owned(),
                sender_last_name: "Lovelace".to_owned(),
                sender_picture: String::new(),
                post_id: None,
                kind: "subscribe".to_owned(),
                read: false,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresNotificationRepository::new(db);

        let result: Option<Notification> = repo.find_by_id(id).await.unwrap();

        let notification = result.unwrap();
        assert_eq!(notification.kind, NotificationKind::Subscribe);
        assert!(!notification.read);
    }
}
