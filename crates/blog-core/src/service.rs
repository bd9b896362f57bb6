//! Blog post resource service - the CRUD operations exposed over HTTP.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::{DomainError, RepoError};
use crate::ports::BlogPostRepository;

const ENTITY: &str = "BlogPost";

/// Resource service over a [`BlogPostRepository`].
///
/// Cheap to clone; handlers share one instance through application state.
#[derive(Clone)]
pub struct BlogPostService {
    repo: Arc<dyn BlogPostRepository>,
}

impl BlogPostService {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, oldest first.
    pub async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Look up a single post.
    pub async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        tracing::debug!(post_id = %id, "Finding blog post");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Create a post, assigning its id and creation timestamp.
    pub async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, DomainError> {
        let post = self.repo.insert(BlogPost::new(draft)).await?;
        tracing::info!(post_id = %post.id, "Blog post created");
        Ok(post)
    }

    /// Replace the fields present in `patch`.
    pub async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, DomainError> {
        patch.validate()?;

        let mut post = self.get(id).await?;
        if patch.is_empty() {
            return Ok(post);
        }
        post.apply(patch);

        match self.repo.update(post).await {
            Ok(post) => {
                tracing::info!(post_id = %id, "Blog post updated");
                Ok(post)
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a post. Later lookups by `id` do not resolve.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Blog post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::Author;
    use crate::ports::BaseRepository;

    /// Minimal map-backed repository for exercising the service in isolation.
    #[derive(Default)]
    struct MapRepository {
        posts: Mutex<HashMap<Uuid, BlogPost>>,
    }

    #[async_trait]
    impl BaseRepository<BlogPost, Uuid> for MapRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
            Ok(self.posts.lock().await.get(&id).cloned())
        }

        async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
            self.posts.lock().await.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
            let mut posts = self.posts.lock().await;
            match posts.get_mut(&entity.id) {
                Some(slot) => {
                    *slot = entity.clone();
                    Ok(entity)
                }
                None => Err(RepoError::NotFound),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.posts
                .lock()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl BlogPostRepository for MapRepository {
        async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
            let mut posts: Vec<_> = self.posts.lock().await.values().cloned().collect();
            posts.sort_by_key(|p| (p.created, p.id));
            Ok(posts)
        }
    }

    fn service() -> BlogPostService {
        BlogPostService::new(Arc::new(MapRepository::default()))
    }

    fn draft(title: &str) -> NewBlogPost {
        NewBlogPost::new(
            Author::new("Grace", "Hopper"),
            title.to_string(),
            "content".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let svc = service();
        let created = svc.create(draft("First")).await.unwrap();

        let found = svc.get(created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let svc = service();
        let err = svc
            .update(Uuid::new_v4(), BlogPostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let svc = service();
        let created = svc.create(draft("First")).await.unwrap();

        let updated = svc
            .update(
                created.id,
                BlogPostPatch {
                    title: Some("Second".to_string()),
                    author_first_name: Some("Anita".to_string()),
                    author_last_name: Some("Borg".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created, created.created);
        assert_eq!(updated.title, "Second");
        assert_eq!(updated.author.full_name(), "Anita Borg");
        assert_eq!(svc.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let svc = service();
        let created = svc.create(draft("Gone")).await.unwrap();

        svc.delete(created.id).await.unwrap();
        assert!(matches!(
            svc.get(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            svc.delete(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
