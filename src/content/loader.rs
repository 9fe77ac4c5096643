//! Content loader - loads posts from the content directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

use super::summary::{count_words, excerpt, reading_time};
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::error::ContentError;
use crate::Blog;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let highlight = &blog.config.highlight;
        let renderer = MarkdownRenderer::with_options(&highlight.theme, highlight.line_number);
        Self { blog, renderer }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir).follow_links(true).into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) || is_hidden(content_dir, path) {
                continue;
            }

            let post = self
                .load_post(path)
                .with_context(|| format!("loading post {:?}", path))?;

            if post.published || self.blog.config.render_drafts {
                posts.push(post);
            } else {
                tracing::debug!("Skipping unpublished post {}", post.slug);
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|e| {
            ContentError::InvalidFrontMatter {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let date = match fm.parse_date() {
            Some(date) => date,
            None => file_modified(path)?,
        };

        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_path_buf();

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let html = self.renderer.render(&full_md)?;
        let excerpt_html = match &excerpt_md {
            Some(md) => self.renderer.render(md)?,
            None => html.clone(),
        };

        let config = &self.blog.config;
        let mut post = Post::new(slug_for(&source), date, source);
        post.title = fm.title;
        post.description = fm.description;
        post.tags = fm.tags;
        post.excerpt = excerpt(&excerpt_html, config.excerpt_length);
        post.time_to_read = reading_time(count_words(&html), config.words_per_minute);
        post.html = html;
        post.published = fm.published;
        post.full_source = path.to_path_buf();

        Ok(post)
    }
}

/// Derive a post's route from its path relative to the content directory
///
/// # Examples
/// ```ignore
/// slug_for(Path::new("hello/index.md"))   // -> "/hello/"
/// slug_for(Path::new("notes/draft.md"))   // -> "/notes/draft/"
/// ```
pub fn slug_for(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.last().map(|p| p == "index").unwrap_or(false) {
        parts.pop();
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Dot-files and dot-directories under the content root are ignored
pub fn is_hidden(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}

fn file_modified(path: &Path) -> Result<NaiveDateTime> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Local>::from(modified).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;

    fn blog_in(dir: &Path) -> Blog {
        let mut config = SiteConfig::default();
        config.excerpt_length = 30;
        Blog::with_config(dir, config)
    }

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join("content/blog").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for(Path::new("hello-world/index.md")), "/hello-world/");
        assert_eq!(slug_for(Path::new("my-post.md")), "/my-post/");
        assert_eq!(slug_for(Path::new("notes/deep/post.markdown")), "/notes/deep/post/");
        assert_eq!(slug_for(Path::new("index.md")), "/");
    }

    #[test]
    fn test_is_hidden() {
        let root = PathBuf::from("/site/content");
        assert!(is_hidden(&root, &root.join(".drafts/a.md")));
        assert!(!is_hidden(&root, &root.join("a/index.md")));
    }

    #[test]
    fn test_load_posts() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "first/index.md",
            "---\ntitle: First\ndate: 2019-01-01\ntags: [x]\n---\nThe very first post on this blog, with enough words to prune.",
        );
        write(
            dir.path(),
            "second.md",
            "---\ntitle: Second\ndate: 2019-02-01\ndescription: Hand written\n---\nBody",
        );
        write(
            dir.path(),
            "draft/index.md",
            "---\ntitle: Draft\ndate: 2019-03-01\npublished: false\n---\nWIP",
        );
        write(dir.path(), "first/diagram.png", "not markdown");

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "/second/");
        assert_eq!(posts[1].slug, "/first/");
        assert_eq!(posts[1].tags, vec!["x"]);
        assert_eq!(posts[1].source, PathBuf::from("first/index.md"));
        assert!(posts[1].excerpt.ends_with('…'));
        assert!(posts[1].html.contains("<p>The very first post"));
        assert_eq!(posts[1].time_to_read, 1);
        assert_eq!(posts[0].summary_html(), "Hand written");
    }

    #[test]
    fn test_render_drafts() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "draft.md",
            "---\ntitle: Draft\ndate: 2019-03-01\npublished: false\n---\nWIP",
        );

        let mut blog = blog_in(dir.path());
        blog.config.render_drafts = true;
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(!posts[0].published);
    }

    #[test]
    fn test_more_marker_sets_excerpt() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "more.md",
            "---\ntitle: More\ndate: 2019-01-01\n---\nShort intro.\n\n<!-- more -->\n\nThe rest of it.",
        );

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].excerpt, "Short intro.");
        assert!(posts[0].html.contains("The rest of it."));
    }

    #[test]
    fn test_malformed_front_matter_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.md", "---\ntitle: [oops\ndate: x\n---\nBody");

        let blog = blog_in(dir.path());
        let err = ContentLoader::new(&blog).load_posts().unwrap_err();
        assert!(err
            .chain()
            .any(|e| e.downcast_ref::<ContentError>().is_some()));
    }

    #[test]
    fn test_post_without_front_matter_starting_with_brace() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "note.md", "{Draft} notes on AppSync resolvers.");

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "/note/");
        assert!(posts[0].html.contains("{Draft} notes"));
    }

    #[test]
    fn test_missing_content_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }
}
