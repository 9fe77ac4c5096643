//! Single post page

use super::{bio, byline, document, layout, newsletter};
use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{decode_entities, html_escape, strip_html, tag_url, url_for};
use crate::query::PostPageData;

/// Tag links sorted alphabetically and separated by commas;
/// empty when the post has no tags.
pub fn tag_chips(site: &SiteMetadata, post: &Post) -> String {
    let tags = post.sorted_tags();
    if tags.is_empty() {
        return String::new();
    }

    let links = tags
        .iter()
        .map(|tag| {
            format!(
                r#"<a class="tag-chip" href="{}">{}</a>"#,
                html_escape(&tag_url(site, tag)),
                html_escape(tag)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(r#"<p class="post-tags">Tagged: {}</p>"#, links)
}

/// Render a full post with tags, newsletter, bio and prev/next navigation
pub fn post_page(site: &SiteMetadata, data: &PostPageData<'_>) -> String {
    let post = data.post;

    let previous = data
        .previous
        .map(|p| nav_link(site, p, "prev", &format!("← {}", html_escape(p.display_title()))))
        .unwrap_or_default();
    let next = data
        .next
        .map(|p| nav_link(site, p, "next", &format!("{} →", html_escape(p.display_title()))))
        .unwrap_or_default();

    let body = format!(
        r#"<article class="blog-post" itemscope itemtype="http://schema.org/Article">
<header>
<h1 itemprop="headline">{title}</h1>
<p>{byline}</p>
{tags}
</header>
<section itemprop="articleBody">{html}</section>
<hr>
{newsletter}
<footer>{bio}</footer>
</article>
<nav class="blog-post-nav">
<ul>
<li>{previous}</li>
<li>{next}</li>
</ul>
</nav>"#,
        title = html_escape(post.display_title()),
        byline = byline(site, post),
        tags = tag_chips(site, post),
        html = post.html,
        newsletter = newsletter(site),
        bio = bio(site),
        previous = previous,
        next = next,
    );

    // The summary is HTML; the meta tag wants its text
    let description = decode_entities(&strip_html(post.summary_html()))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    document(
        site,
        post.display_title(),
        &description,
        &layout(site, &url_for(site, &post.slug), &body),
    )
}

fn nav_link(site: &SiteMetadata, post: &Post, rel: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" rel="{}">{}</a>"#,
        html_escape(&url_for(site, &post.slug)),
        rel,
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures;

    #[test]
    fn test_tag_chips_sorted_and_comma_separated() {
        let site = fixtures::site();
        let mut post = fixtures::post("/p/", Some("P"), (2019, 1, 1));
        post.tags = vec!["graphql".into(), "AWS Amplify".into(), "appsync".into()];

        assert_eq!(
            tag_chips(&site, &post),
            concat!(
                r#"<p class="post-tags">Tagged: "#,
                r#"<a class="tag-chip" href="/tags/aws-amplify/">AWS Amplify</a>, "#,
                r#"<a class="tag-chip" href="/tags/appsync/">appsync</a>, "#,
                r#"<a class="tag-chip" href="/tags/graphql/">graphql</a></p>"#
            )
        );
    }

    #[test]
    fn test_no_tags_no_chips() {
        let site = fixtures::site();
        let post = fixtures::post("/p/", Some("P"), (2019, 1, 1));
        assert_eq!(tag_chips(&site, &post), "");
    }

    #[test]
    fn test_post_page_with_both_neighbours() {
        let site = fixtures::site();
        let a = fixtures::post("/a/", Some("A"), (2019, 1, 1));
        let b = fixtures::post("/b/", Some("B"), (2019, 2, 1));
        let c = fixtures::post("/c/", Some("C"), (2019, 3, 1));

        let html = post_page(
            &site,
            &PostPageData {
                post: &b,
                previous: Some(&a),
                next: Some(&c),
            },
        );

        assert!(html.contains(r#"<h1 itemprop="headline">B</h1>"#));
        assert!(html.contains(r#"<section itemprop="articleBody"><p>Body of the post.</p></section>"#));
        assert!(html.contains(r#"<a href="/a/" rel="prev">← A</a>"#));
        assert!(html.contains(r#"<a href="/c/" rel="next">C →</a>"#));
        assert!(html.contains("Written by <strong>Jane Doe</strong>"));
        assert!(html.contains("<title>B | Cloud Notes</title>"));
    }

    #[test]
    fn test_post_page_at_boundaries() {
        let site = fixtures::site();
        let only = fixtures::post("/only/", Some("Only"), (2019, 1, 1));

        let html = post_page(
            &site,
            &PostPageData {
                post: &only,
                previous: None,
                next: None,
            },
        );

        assert!(!html.contains(r#"rel="prev""#));
        assert!(!html.contains(r#"rel="next""#));
        assert!(!html.contains("newsletter"));
    }

    #[test]
    fn test_meta_description_is_escaped_once() {
        let site = fixtures::site();
        let mut post = fixtures::post("/p/", Some("P"), (2019, 1, 1));
        post.excerpt = "Tom &amp; Jerry build APIs.".to_string();

        let data = PostPageData {
            post: &post,
            previous: None,
            next: None,
        };
        let html = post_page(&site, &data);
        assert!(html.contains(r#"<meta name="description" content="Tom &amp; Jerry build APIs.">"#));

        post.description = Some("Using <em>AppSync</em> &amp; Lambda".to_string());
        let data = PostPageData {
            post: &post,
            previous: None,
            next: None,
        };
        let html = post_page(&site, &data);
        assert!(html.contains(r#"<meta name="description" content="Using AppSync &amp; Lambda">"#));
    }
}
