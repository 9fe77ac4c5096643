//! Post summary used by the blog index and tag pages

use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{html_escape, link_to, time_tag};

/// Date and reading time, e.g. `January 01, 2019 • 3 min read`
pub fn byline(site: &SiteMetadata, post: &Post) -> String {
    format!(
        "{} • {} min read",
        time_tag(&post.date, &site.date_format),
        post.time_to_read
    )
}

/// Render one post summary: linked title, byline, and description or excerpt
pub fn post_list_item(site: &SiteMetadata, post: &Post) -> String {
    let title = format!(
        r#"<span itemprop="headline">{}</span>"#,
        html_escape(post.display_title())
    );

    format!(
        r#"<article class="post-list-item" itemscope itemtype="http://schema.org/Article">
<header>
<h3>{}</h3>
<small>{}</small>
</header>
<section><p itemprop="description">{}</p></section>
</article>"#,
        link_to(site, &post.slug, &title).replacen("<a ", r#"<a itemprop="url" "#, 1),
        byline(site, post),
        post.summary_html()
    )
}
