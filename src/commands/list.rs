//! List site content

use anyhow::{bail, Result};

use crate::content::ContentLoader;
use crate::helpers::{format_date, url_for};
use crate::query::ContentStore;
use crate::Blog;

/// Describe the site's posts, tags or routes, one line each
pub fn describe(blog: &Blog, content_type: &str) -> Result<Vec<String>> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let store = ContentStore::new(blog.config.metadata(), posts)?;
    let site = store.site_metadata();

    let lines = match content_type {
        "post" | "posts" => store
            .all_posts()
            .iter()
            .map(|p| {
                format!(
                    "{}  {}  {}",
                    format_date(&p.date, "YYYY-MM-DD"),
                    p.display_title(),
                    p.slug
                )
            })
            .collect(),
        "tag" | "tags" => store
            .tags()
            .iter()
            .map(|t| format!("{} ({})", t.name, t.count))
            .collect(),
        "route" | "routes" => store
            .routes()
            .iter()
            .map(|r| url_for(site, &r.path(site)))
            .collect(),
        _ => bail!(
            "Unknown type: {}. Available: post, tag, route",
            content_type
        ),
    };

    Ok(lines)
}

/// Print the listing for `content_type`
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let lines = describe(blog, content_type)?;
    println!("{} ({}):", content_type, lines.len());
    for line in lines {
        println!("  {}", line);
    }
    Ok(())
}
