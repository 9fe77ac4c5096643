//! Layout shell shared by every page

use crate::config::SiteMetadata;
use crate::helpers::{html_escape, is_home, link_to};

/// Wrap `children` with the site header.
///
/// The home route gets an enlarged title; every other route gets a compact
/// title linking back home.
pub fn layout(site: &SiteMetadata, path: &str, children: &str) -> String {
    let title = html_escape(&site.title);
    let (root_flag, header) = if is_home(site, path) {
        ("true", format!(r#"<h1 class="main-heading">{}</h1>"#, title))
    } else {
        (
            "false",
            format!(
                r#"<h3 class="header-link-home">{}</h3>"#,
                link_to(site, "/", &title)
            ),
        )
    };

    format!(
        r#"<div class="global-wrapper" data-is-root-path="{}">
<header class="global-header">{}</header>
<main>{}</main>
</div>"#,
        root_flag, header, children
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures;

    #[test]
    fn test_home_route_has_enlarged_title() {
        let site = fixtures::site();
        let html = layout(&site, "/", "<p>child</p>");
        assert!(html.contains(r#"<h1 class="main-heading">Cloud Notes</h1>"#));
        assert!(html.contains(r#"data-is-root-path="true""#));
        assert!(html.contains("<main><p>child</p></main>"));
    }

    #[test]
    fn test_other_routes_link_home() {
        let site = fixtures::site();
        let html = layout(&site, "/hello/", "");
        assert!(html.contains(r#"<h3 class="header-link-home"><a href="/">Cloud Notes</a></h3>"#));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_home_route_respects_root() {
        let mut site = fixtures::site();
        site.root = "/blog/".to_string();
        assert!(layout(&site, "/blog/", "").contains("main-heading"));
        assert!(layout(&site, "/blog/tags/", "").contains(r#"href="/blog/""#));
    }
}
