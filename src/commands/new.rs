//! Create a new post

use anyhow::{bail, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

#[derive(Serialize)]
struct NewPostFrontMatter<'a> {
    title: &'a str,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    tags: &'a [String],
}

/// Create `content_dir/<slugified-title>/index.md` and return its path
pub fn create_post(
    blog: &Blog,
    title: &str,
    tags: &[String],
    description: Option<&str>,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    let target_dir = blog.content_dir.join(&slug);
    let file_path = target_dir.join("index.md");
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let front_matter = NewPostFrontMatter {
        title,
        date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        description,
        tags,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&front_matter)?);

    fs::create_dir_all(&target_dir)?;
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}
