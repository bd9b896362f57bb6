use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used on read: `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// BlogPost entity - one persisted blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated id and creation timestamp.
    pub fn new(draft: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: draft.author,
            title: draft.title,
            content: draft.content,
            created: Utc::now(),
        }
    }

    /// Apply a partial update. `id` and `created` are left untouched.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(first_name) = patch.author_first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = patch.author_last_name {
            self.author.last_name = last_name;
        }
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(author: Author, title: String, content: String) -> Result<Self, DomainError> {
        non_empty("title", &title)?;
        non_empty("content", &content)?;
        non_empty("author.firstName", &author.first_name)?;
        non_empty("author.lastName", &author.last_name)?;

        Ok(Self {
            author,
            title,
            content,
        })
    }
}

/// Fields replaceable by an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
}

impl BlogPostPatch {
    /// Reject fields that are present but empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("title", &self.title),
            ("content", &self.content),
            ("author.firstName", &self.author_first_name),
            ("author.lastName", &self.author_last_name),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                non_empty(name, value)?;
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author_first_name.is_none()
            && self.author_last_name.is_none()
    }
}

/// Blank (empty or whitespace-only) values are rejected.
fn non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "`{}` must not be empty",
            field
        )));
    }
    Ok(())
}
