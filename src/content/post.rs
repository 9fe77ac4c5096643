//! Post model

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// A blog post, materialized once per build from one content file
#[derive(Debug, Clone)]
pub struct Post {
    /// Route of the post, e.g. `/hello-world/`
    pub slug: String,

    /// Post title
    pub title: Option<String>,

    /// Publication date
    pub date: NaiveDateTime,

    /// Hand-written summary (trusted HTML)
    pub description: Option<String>,

    /// Post tags, in front-matter order
    pub tags: Vec<String>,

    /// Rendered HTML content
    pub html: String,

    /// Plain-text prefix of the body, HTML-escaped
    pub excerpt: String,

    /// Estimated reading time in minutes
    pub time_to_read: u32,

    /// Whether the post is published
    pub published: bool,

    /// Source file path, relative to the content directory
    pub source: PathBuf,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: impl Into<String>, date: NaiveDateTime, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self {
            slug: slug.into(),
            title: None,
            date,
            description: None,
            tags: Vec::new(),
            html: String::new(),
            excerpt: String::new(),
            time_to_read: 1,
            published: true,
            full_source: source.clone(),
            source,
        }
    }

    /// Title shown for the post, falling back to the slug
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => self.slug.as_str(),
        }
    }

    /// Summary HTML: the description when present, else the excerpt
    pub fn summary_html(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => self.excerpt.as_str(),
        }
    }

    /// Whether the post carries `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags sorted alphabetically without duplicates
    pub fn sorted_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }
}
