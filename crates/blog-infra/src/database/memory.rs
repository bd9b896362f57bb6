//! In-memory blog post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory repository using a HashMap with async RwLock.
///
/// Each instance is an isolated store, so tests can build a fresh one per case.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by_key(|p| (p.created, p.id));
        Ok(posts)
    }
}
