//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author.full_name(),
        title: post.title,
        content: post.content,
        created: post.created.to_rfc3339(),
    }
}

fn required(field: &str, value: Option<String>) -> AppResult<String> {
    value.ok_or_else(|| AppError::Validation(format!("Missing `{}` in request body", field)))
}

/// Check required fields and build a validated draft.
fn new_post_from(req: CreateBlogPostRequest) -> AppResult<NewBlogPost> {
    let title = required("title", req.title)?;
    let content = required("content", req.content)?;
    let author = req
        .author
        .ok_or_else(|| AppError::Validation("Missing `author` in request body".to_string()))?;
    let first_name = required("author.firstName", author.first_name)?;
    let last_name = required("author.lastName", author.last_name)?;

    Ok(NewBlogPost::new(
        Author::new(first_name, last_name),
        title,
        content,
    )?)
}

fn patch_from(id: Uuid, req: UpdateBlogPostRequest) -> AppResult<BlogPostPatch> {
    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::Validation(format!(
                "Request path id ({}) and request body id ({}) values must match",
                id, body_id
            )));
        }
    }

    let (author_first_name, author_last_name) = match req.author {
        Some(author) => (author.first_name, author.last_name),
        None => (None, None),
    };

    Ok(BlogPostPatch {
        title: req.title,
        content: req.content,
        author_first_name,
        author_last_name,
    })
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let draft = new_post_from(body.into_inner())?;
    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = patch_from(id, body.into_inner())?;
    let post = state.posts.update(id, patch).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use blog_shared::dto::AuthorName;

    use super::*;

    fn full_request() -> CreateBlogPostRequest {
        CreateBlogPostRequest {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            author: Some(AuthorName {
                first_name: Some("A".to_string()),
                last_name: Some("B".to_string()),
            }),
        }
    }

    #[test]
    fn test_missing_last_name_named_in_error() {
        let mut req = full_request();
        req.author = Some(AuthorName {
            first_name: Some("A".to_string()),
            last_name: None,
        });

        match new_post_from(req) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("author.lastName")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_request_builds_draft() {
        let draft = new_post_from(full_request()).unwrap();
        assert_eq!(draft.author.full_name(), "A B");
    }

    #[test]
    fn test_body_id_must_match_path() {
        let id = Uuid::new_v4();
        let req = UpdateBlogPostRequest {
            id: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        };
        assert!(matches!(patch_from(id, req), Err(AppError::Validation(_))));

        let req = UpdateBlogPostRequest {
            id: Some(id.to_string()),
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(patch_from(id, req).unwrap().title.as_deref(), Some("x"));
    }

    #[test]
    fn test_body_id_compared_as_uuid() {
        let id = Uuid::new_v4();
        for body_id in [
            id.to_string().to_uppercase(),
            id.braced().to_string(),
            id.simple().to_string(),
        ] {
            let req = UpdateBlogPostRequest {
                id: Some(body_id),
                ..Default::default()
            };
            assert!(patch_from(id, req).is_ok());
        }

        let req = UpdateBlogPostRequest {
            id: Some("not-a-uuid".to_string()),
            ..Default::default()
        };
        assert!(matches!(patch_from(id, req), Err(AppError::Validation(_))));
    }
}
