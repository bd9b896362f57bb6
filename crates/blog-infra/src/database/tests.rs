#[cfg(test)]
mod tests {
    use crate::database::entity::blog_post;
    use crate::database::postgres_repo::PostgresBlogPostRepository;
    use blog_core::domain::{Author, BlogPost, NewBlogPost};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, BlogPostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(title: &str) -> blog_post::Model {
        blog_post::Model {
            id: uuid::Uuid::new_v4(),
            author_first_name: "Barbara".to_owned(),
            author_last_name: "Liskov".to_owned(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            created: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let row = model("Test Post");
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author.full_name(), "Barbara Liskov");
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let post = BlogPost::new(
            NewBlogPost::new(
                Author::new("Barbara", "Liskov"),
                "Substitution".to_owned(),
                "Content".to_owned(),
            )
            .unwrap(),
        );
        let stored = blog_post::Model {
            id: post.id,
            author_first_name: post.author.first_name.clone(),
            author_last_name: post.author.last_name.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            created: post.created.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let saved = repo.insert(post.clone()).await.unwrap();

        assert_eq!(saved, post);
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let rows = vec![model("One"), model("Two")];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let posts = repo.find_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "One");
        assert_eq!(posts[1].title, "Two");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let err = BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let row = model("Before");
        let mut post: BlogPost = row.clone().into();
        post.title = "After".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog_post::Model {
                title: "After".to_owned(),
                ..row
            }]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let updated = repo.update(post.clone()).await.unwrap();

        assert_eq!(updated, post);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_post::Model>::new()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let ghost: BlogPost = model("Ghost").into();
        let err = repo.update(ghost).await.unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }
}
