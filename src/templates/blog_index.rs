//! Blog index: every post, newest first

use super::{bio, document, footer, layout, post_list_item};
use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::url_for;

/// Render the home page. `posts` must already be newest first.
pub fn blog_index(site: &SiteMetadata, posts: &[Post], year: i32) -> String {
    let list = if posts.is_empty() {
        "<p>No blog posts found.</p>".to_string()
    } else {
        let items = posts
            .iter()
            .map(|post| format!("<li>{}</li>", post_list_item(site, post)))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<ol class=\"post-list\" style=\"list-style: none\">\n{}\n</ol>",
            items
        )
    };

    let body = format!("{}\n{}\n{}", bio(site), list, footer(site, year));

    document(site, "", "", &layout(site, &url_for(site, "/"), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures;

    #[test]
    fn test_blog_index_keeps_order() {
        let site = fixtures::site();
        let posts = vec![
            fixtures::post("/c/", Some("C"), (2019, 3, 1)),
            fixtures::post("/b/", Some("B"), (2019, 2, 1)),
            fixtures::post("/a/", Some("A"), (2019, 1, 1)),
        ];

        let html = blog_index(&site, &posts, 2019);
        let c = html.find(r#"href="/c/""#).unwrap();
        let b = html.find(r#"href="/b/""#).unwrap();
        let a = html.find(r#"href="/a/""#).unwrap();
        assert!(c < b && b < a);
        assert!(html.contains(r#"<h1 class="main-heading">Cloud Notes</h1>"#));
        assert!(html.contains("© 2019"));
        assert!(html.find(r#"class="bio""#).unwrap() < c);
    }

    #[test]
    fn test_empty_blog_index() {
        let site = fixtures::site();
        let html = blog_index(&site, &[], 2020);
        assert!(html.contains("No blog posts found."));
    }
}
