//! Page templates
//!
//! Every template is a pure function from build-time data to markup. Small
//! components (layout, bio, footer, post list item, newsletter) return HTML
//! fragments; page templates compose them and return complete documents.
//!
//! Text coming from front-matter or config is escaped here. Rendered post
//! bodies, descriptions, excerpts and the bio call-to-action are trusted HTML
//! and inserted as-is.

mod bio;
mod blog_index;
mod footer;
mod layout;
mod newsletter;
mod not_found;
mod post;
mod post_list_item;
mod tag;
mod tags_index;

pub use bio::bio;
pub use blog_index::blog_index;
pub use footer::footer;
pub use layout::layout;
pub use newsletter::newsletter;
pub use not_found::not_found;
pub use post::{post_page, tag_chips};
pub use post_list_item::{byline, post_list_item};
pub use tag::{tag_header, tag_page};
pub use tags_index::tags_index;

use crate::config::SiteMetadata;
use crate::helpers::{css, html_escape};

/// Wrap a page body in the HTML document shell
///
/// `title` and `description` are plain text and get escaped here.
pub fn document(site: &SiteMetadata, title: &str, description: &str, body: &str) -> String {
    let full_title = if title.is_empty() || title == site.title {
        html_escape(&site.title)
    } else {
        format!("{} | {}", html_escape(title), html_escape(&site.title))
    };

    let description = if description.is_empty() {
        site.description.as_str()
    } else {
        description
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
{stylesheet}
</head>
<body>
{body}
</body>
</html>
"#,
        lang = html_escape(&site.language),
        title = full_title,
        description = html_escape(description),
        stylesheet = css(site, "/style.css"),
        body = body,
    )
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::config::SiteMetadata;
    use crate::content::Post;

    pub fn site() -> SiteMetadata {
        let mut site = SiteMetadata::default();
        site.title = "Cloud Notes".to_string();
        site.author = "Jane Doe".to_string();
        site.social.twitter = Some("janedoe".to_string());
        site
    }

    pub fn post(slug: &str, title: Option<&str>, date: (i32, u32, u32)) -> Post {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut post = Post::new(slug, date, format!("{}.md", slug.trim_matches('/')));
        post.title = title.map(str::to_string);
        post.html = "<p>Body of the post.</p>".to_string();
        post.excerpt = "Body of the post.".to_string();
        post.time_to_read = 3;
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let site = fixtures::site();
        let html = document(&site, "A <Post>", "", "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;Post&gt; | Cloud Notes</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/style.css">"#));
        assert!(html.contains("<main>hi</main>"));
    }

    #[test]
    fn test_document_title_for_home() {
        let site = fixtures::site();
        let html = document(&site, "", "", "");
        assert!(html.contains("<title>Cloud Notes</title>"));
    }
}
