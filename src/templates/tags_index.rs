//! Index of every tag

use super::{document, layout};
use crate::config::SiteMetadata;
use crate::helpers::{html_escape, tag_url, tags_index_route, url_for};
use crate::query::TagSummary;

/// Render every tag with its post count, each linking to its tag page
pub fn tags_index(site: &SiteMetadata, tags: &[TagSummary]) -> String {
    let items = tags
        .iter()
        .map(|tag| {
            format!(
                r#"<li><a href="{}">{} ({})</a></li>"#,
                html_escape(&tag_url(site, &tag.name)),
                html_escape(&tag.name),
                tag.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!("<h1>Tags</h1>\n<ul class=\"tag-list\">\n{}\n</ul>", items);

    document(
        site,
        "Tags",
        "",
        &layout(site, &url_for(site, &tags_index_route(site)), &body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures;

    #[test]
    fn test_tags_index() {
        let site = fixtures::site();
        let tags = vec![
            TagSummary {
                name: "Cloud Functions".to_string(),
                count: 1,
            },
            TagSummary {
                name: "graphql".to_string(),
                count: 4,
            },
        ];

        let html = tags_index(&site, &tags);
        assert!(html.contains(r#"<li><a href="/tags/cloud-functions/">Cloud Functions (1)</a></li>"#));
        assert!(html.contains(r#"<li><a href="/tags/graphql/">graphql (4)</a></li>"#));
        assert!(html.contains("<title>Tags | Cloud Notes</title>"));
    }
}
