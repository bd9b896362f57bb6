//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!("Listing blog posts");

        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
