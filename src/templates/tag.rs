//! Page listing every post that carries one tag

use super::{bio, document, layout, post_list_item};
use crate::config::SiteMetadata;
use crate::helpers::{html_escape, link_to, tag_route, tags_index_route, url_for};
use crate::query::TagPageData;

/// Header line, e.g. `2 posts tagged with "graphql"`
pub fn tag_header(tag: &str, count: usize) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    format!("{} {} tagged with \"{}\"", count, noun, tag)
}

/// Render the tag page
pub fn tag_page(site: &SiteMetadata, data: &TagPageData<'_>) -> String {
    let header = tag_header(data.tag, data.total_count);

    let items = data
        .posts
        .iter()
        .map(|post| format!("<li>{}</li>", post_list_item(site, post)))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<h1>{}</h1>
<ol class="post-list" style="list-style: none">
{}
</ol>
{}
<p>{}</p>"#,
        html_escape(&header),
        items,
        bio(site),
        link_to(site, &tags_index_route(site), "All tags")
    );

    document(
        site,
        &header,
        "",
        &layout(site, &url_for(site, &tag_route(site, data.tag)), &body),
    )
}
