//! Data Transfer Objects - request/response bodies for the posts API.
//!
//! Request fields are optional at the serde layer so that a missing field is
//! reported as a validation error naming it, rather than a generic parse error.

use serde::{Deserialize, Serialize};

/// Author name as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorName>,
}

/// Body of `PUT /posts/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorName>,
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    /// `"first last"`.
    pub author: String,
    pub title: String,
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
}
