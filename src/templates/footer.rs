//! Site footer

use crate::config::SiteMetadata;
use crate::helpers::{html_escape, link_to};

/// Render the copyright line and the configured footer links
pub fn footer(site: &SiteMetadata, year: i32) -> String {
    let links = site
        .footer_links
        .iter()
        .map(|l| link_to(site, &l.url, &html_escape(&l.name)))
        .collect::<Vec<_>>()
        .join(" &bull; ");

    if links.is_empty() {
        format!(r#"<footer class="site-footer">© {}</footer>"#, year)
    } else {
        format!(
            r#"<footer class="site-footer">© {} &bull; {}</footer>"#,
            year, links
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FooterLink;
    use crate::templates::fixtures;

    #[test]
    fn test_footer_links() {
        let mut site = fixtures::site();
        site.footer_links = vec![
            FooterLink {
                name: "twitter".to_string(),
                url: "https://twitter.com/janedoe".to_string(),
            },
            FooterLink {
                name: "rss".to_string(),
                url: "/rss.xml".to_string(),
            },
        ];

        let html = footer(&site, 2019);
        assert!(html.starts_with(r#"<footer class="site-footer">© 2019 &bull; "#));
        assert!(html.contains(">twitter</a>"));
        assert!(html.contains(r#"<a href="/rss.xml">rss</a>"#));
    }

    #[test]
    fn test_footer_without_links() {
        let site = crate::config::SiteMetadata::default();
        assert_eq!(
            footer(&site, 2020),
            r#"<footer class="site-footer">© 2020</footer>"#
        );
    }
}
