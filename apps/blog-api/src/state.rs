//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogPostService;
use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::PostgresBlogPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: BlogPostService,
}

impl AppState {
    /// Build state around an explicit repository.
    pub fn with_repository(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts: BlogPostService::new(repo),
        }
    }

    /// State backed by a fresh, isolated in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn BlogPostRepository> = {
            if let Some(config) = db_config {
                match blog_infra::database::connect(config).await {
                    Ok(conn) => Arc::new(PostgresBlogPostRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryBlogPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBlogPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn BlogPostRepository> = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryBlogPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self::with_repository(repo)
    }
}
