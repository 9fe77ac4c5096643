//! Author bio block

use crate::config::SiteMetadata;
use crate::helpers::{html_escape, image_tag};

/// Render the author's avatar, name, social link and call-to-action
pub fn bio(site: &SiteMetadata) -> String {
    let mut html = String::from(r#"<div class="bio">"#);

    if let Some(avatar) = &site.avatar {
        html.push_str(
            &image_tag(site, avatar, &site.author, site.avatar_size)
                .replacen("<img ", r#"<img class="bio-avatar" "#, 1),
        );
    }

    html.push_str(&format!(
        "<p>Written by <strong>{}</strong>",
        html_escape(&site.author)
    ));
    if !site.author_summary.is_empty() {
        html.push(' ');
        html.push_str(&html_escape(&site.author_summary));
    }
    if let Some(handle) = &site.social.twitter {
        html.push_str(&format!(
            r#" <a href="https://twitter.com/{}">You should follow them on Twitter</a>"#,
            html_escape(handle)
        ));
    }
    html.push_str("</p>");

    if let Some(cta) = &site.bio_call_to_action {
        html.push_str(&format!(r#"<p class="bio-cta">{}</p>"#, cta));
    }

    html.push_str("</div>");
    html
}
