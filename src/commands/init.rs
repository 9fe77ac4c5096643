//! Initialize a new blog

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Blog
description: A blog built with blogsmith
author: Anonymous
author_summary: ''
language: en
social:
  twitter:
  github:

# URL
root: /

# Directory
content_dir: content/blog
static_dir: static
public_dir: public
tag_dir: tags

# Bio
avatar:
avatar_size: 50
bio_call_to_action:

# Newsletter
newsletter:
  enabled: false
  action: ''

# Footer (defaults to the social links when empty)
footer_links: []

# Writing
excerpt_length: 140
words_per_minute: 265
date_format: MMMM DD, YYYY
render_drafts: false
highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

const DEFAULT_STYLE: &str = r#"body {
  margin: 0 auto;
  max-width: 42rem;
  padding: 2.5rem 1.25rem;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
  line-height: 1.6;
}

.main-heading { font-size: 2.5rem; }
.header-link-home a { text-decoration: none; }
.post-list { padding: 0; }
.bio { display: flex; align-items: center; gap: 1rem; margin: 2rem 0; }
.bio-avatar { border-radius: 50%; }
.blog-post-nav ul { display: flex; justify-content: space-between; list-style: none; padding: 0; }
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{:?} already exists, refusing to overwrite", config_path);
    }

    fs::create_dir_all(target_dir.join("content/blog/hello-world"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(target_dir.join("static/style.css"), DEFAULT_STYLE)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: The first post on this blog.
tags:
  - meta
---

This is your very first post. Write Markdown here and run

```bash
$ blogsmith generate
```

to build the site into `public/`, or `blogsmith server` to preview it with live reload.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(
        target_dir.join("content/blog/hello-world/index.md"),
        sample_post,
    )?;

    tracing::info!("Scaffolded site in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use crate::Blog;

    #[test]
    fn test_init_site_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "My Blog");
        assert!(blog.config.social.twitter.is_none());

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "/hello-world/");
        assert_eq!(posts[0].tags, vec!["meta"]);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
