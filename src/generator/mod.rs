//! Generator module - writes one HTML file per route into the public directory

use anyhow::{anyhow, Context, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::loader::{is_hidden, is_markdown_file};
use crate::content::Post;
use crate::query::{ContentStore, Route};
use crate::templates;
use crate::Blog;

/// What a build produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
}

/// Static site generator
pub struct Generator {
    blog: Blog,
    year: i32,
}

impl Generator {
    /// Create a new generator; the footer shows the current year
    pub fn new(blog: &Blog) -> Self {
        Self::with_year(blog, chrono::Local::now().year())
    }

    /// Create a generator with a fixed footer year
    pub fn with_year(blog: &Blog, year: i32) -> Self {
        Self {
            blog: blog.clone(),
            year,
        }
    }

    /// Generate the entire site
    pub fn generate(&self, posts: Vec<Post>) -> Result<BuildReport> {
        // Reject bad content before touching the output
        let store = ContentStore::new(self.blog.config.metadata(), posts)?;

        fs::create_dir_all(&self.blog.public_dir)
            .with_context(|| format!("creating {:?}", self.blog.public_dir))?;

        let mut report = BuildReport::default();
        report.assets += self.copy_static_assets()?;
        report.assets += self.copy_content_assets()?;

        for route in store.routes() {
            let html = self.render(&store, &route)?;
            let output_path = self
                .blog
                .public_dir
                .join(route.output_file(store.site_metadata()));

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)
                .with_context(|| format!("writing {:?}", output_path))?;
            tracing::debug!("Generated: {:?}", output_path);
            report.pages += 1;
        }

        tracing::info!(
            "Wrote {} pages and {} assets for {} posts and {} tags",
            report.pages,
            report.assets,
            store.all_posts().len(),
            store.tags().len()
        );

        Ok(report)
    }

    /// Render the page for one route
    pub fn render(&self, store: &ContentStore, route: &Route) -> Result<String> {
        let site = store.site_metadata();
        let html = match route {
            Route::Index => templates::blog_index(site, store.all_posts(), self.year),
            Route::Post(slug) => {
                let data = store
                    .post_by_slug(slug)
                    .ok_or_else(|| anyhow!("no post with slug {}", slug))?;
                templates::post_page(site, &data)
            }
            Route::TagsIndex => templates::tags_index(site, &store.tags()),
            Route::Tag(name) => {
                let data = store
                    .posts_by_tag(name)
                    .ok_or_else(|| anyhow!("no posts tagged {:?}", name))?;
                templates::tag_page(site, &data)
            }
            Route::NotFound => templates::not_found(site),
        };
        Ok(html)
    }

    /// Copy the static directory verbatim
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.blog.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }
        copy_tree(static_dir, &self.blog.public_dir, |_| true)
    }

    /// Copy files that live next to posts (images, downloads)
    fn copy_content_assets(&self) -> Result<usize> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            return Ok(0);
        }
        copy_tree(content_dir, &self.blog.public_dir, |path| {
            !is_markdown_file(path) && !is_hidden(content_dir, path)
        })
    }
}

/// Copy every file under `from` that passes `filter` to the same relative path under `to`
fn copy_tree(from: &Path, to: &Path, filter: impl Fn(&Path) -> bool) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !filter(path) {
            continue;
        }

        let relative = path.strip_prefix(from)?;
        let dest = to.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest).with_context(|| format!("copying {:?}", path))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentLoader;
    use crate::error::ContentError;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn post_file(title: &str, date: &str, tags: &str) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\ntags: {}\n---\n\nPost {} body.\n",
            title, date, tags, title
        )
    }

    fn scenario_site() -> (tempfile::TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content/blog");
        write(&content.join("a/index.md"), &post_file("A", "2019-01-01", "[x]"));
        write(&content.join("b/index.md"), &post_file("B", "2019-02-01", "[x, y]"));
        write(&content.join("c/index.md"), &post_file("C", "2019-03-01", "[y]"));
        write(&content.join("b/diagram.png"), "png");
        write(&dir.path().join("static/style.css"), "body {}");

        let mut config = SiteConfig::default();
        config.title = "Scenario".to_string();
        let blog = Blog::with_config(dir.path(), config);
        (dir, blog)
    }

    fn build(blog: &Blog) -> BuildReport {
        let posts = ContentLoader::new(blog).load_posts().unwrap();
        Generator::with_year(blog, 2019).generate(posts).unwrap()
    }

    fn read(blog: &Blog, relative: &str) -> String {
        fs::read_to_string(blog.public_dir.join(relative)).unwrap()
    }

    fn order(html: &str, slugs: &[&str]) -> bool {
        let positions: Vec<usize> = slugs
            .iter()
            .map(|s| html.find(&format!(r#"itemprop="url" href="{}""#, s)).unwrap())
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_generate_scenario() {
        let (_dir, blog) = scenario_site();
        let report = build(&blog);

        // index + 3 posts + tags index + 2 tags + 404
        assert_eq!(report.pages, 8);
        assert_eq!(report.assets, 2);

        let index = read(&blog, "index.html");
        assert!(order(&index, &["/c/", "/b/", "/a/"]));

        let x = read(&blog, "tags/x/index.html");
        assert!(x.contains("2 posts tagged with &quot;x&quot;"));
        assert!(order(&x, &["/b/", "/a/"]));
        assert!(!x.contains(r#"href="/c/""#));

        let y = read(&blog, "tags/y/index.html");
        assert!(y.contains("2 posts tagged with &quot;y&quot;"));
        assert!(order(&y, &["/c/", "/b/"]));

        let b = read(&blog, "b/index.html");
        assert!(b.contains(r#"<a href="/a/" rel="prev">← A</a>"#));
        assert!(b.contains(r#"<a href="/c/" rel="next">C →</a>"#));

        let a = read(&blog, "a/index.html");
        assert!(!a.contains(r#"rel="prev""#));
        let c = read(&blog, "c/index.html");
        assert!(!c.contains(r#"rel="next""#));

        let tags = read(&blog, "tags/index.html");
        assert!(tags.contains(r#"<a href="/tags/x/">x (2)</a>"#));
        assert!(tags.contains(r#"<a href="/tags/y/">y (2)</a>"#));

        assert!(blog.public_dir.join("404.html").exists());
        assert!(blog.public_dir.join("style.css").exists());
        assert!(blog.public_dir.join("b/diagram.png").exists());
    }

    #[test]
    fn test_single_post_tag_is_singular() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("content/blog/solo.md"),
            &post_file("Solo", "2020-05-05", "[lonely]"),
        );
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        build(&blog);

        let page = read(&blog, "tags/lonely/index.html");
        assert!(page.contains("1 post tagged with &quot;lonely&quot;"));
    }

    #[test]
    fn test_duplicate_slug_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content/blog");
        write(&content.join("same.md"), &post_file("One", "2019-01-01", "[]"));
        write(&content.join("same/index.md"), &post_file("Two", "2019-01-02", "[]"));

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let err = Generator::with_year(&blog, 2019).generate(posts).unwrap_err();

        assert!(err.downcast_ref::<ContentError>().is_some());
        assert!(!blog.public_dir.exists());
    }

    #[test]
    fn test_post_shadowing_a_generated_page_fails() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content/blog");
        write(&content.join("index.md"), &post_file("Home", "2019-01-01", "[]"));
        write(&content.join("other.md"), &post_file("Other", "2019-02-01", "[x]"));
        write(&content.join("tags/x.md"), &post_file("Shadow", "2019-03-01", "[]"));

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let err = Generator::with_year(&blog, 2019).generate(posts).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::RouteCollision { .. })
        ));
        assert!(!blog.public_dir.exists());
    }

    #[test]
    fn test_unsluggable_tag_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("content/blog/post.md"),
            &post_file("Post", "2019-01-01", r#"["+++", rust]"#),
        );

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let err = Generator::with_year(&blog, 2019).generate(posts).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::EmptyTagSlug { .. })
        ));
        assert!(!blog.public_dir.exists());
    }

    #[test]
    fn test_empty_site() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let report = build(&blog);

        // index + tags index + 404
        assert_eq!(report.pages, 3);
        assert!(read(&blog, "index.html").contains("No blog posts found."));
    }
}
