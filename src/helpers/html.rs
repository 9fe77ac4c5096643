//! HTML helper functions

use super::url::url_for;
use crate::config::SiteMetadata;

/// Generate an anchor tag; `text` must already be safe HTML
///
/// # Examples
/// ```ignore
/// link_to(&site, "/about/", "About") // -> <a href="/about/">About</a>
/// ```
pub fn link_to(site: &SiteMetadata, path: &str, text: &str) -> String {
    if is_external(path) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(path),
            text
        )
    } else {
        format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(&url_for(site, path)),
            text
        )
    }
}

/// Generate a fixed-size image tag
pub fn image_tag(site: &SiteMetadata, path: &str, alt: &str, size: u32) -> String {
    let src = if is_external(path) {
        path.to_string()
    } else {
        url_for(site, path)
    };

    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}">"#,
        html_escape(&src),
        html_escape(alt),
        size,
        size
    )
}

/// Generate a stylesheet link tag
pub fn css(site: &SiteMetadata, path: &str) -> String {
    format!(
        r#"<link rel="stylesheet" href="{}">"#,
        html_escape(&url_for(site, path))
    )
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Decode the handful of entities pulldown-cmark emits in text
pub fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Prune text to at most `length` characters, cutting at a word boundary
/// and appending an ellipsis when anything was cut.
pub fn prune(s: &str, length: usize) -> String {
    let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.chars().count() <= length {
        return normalized;
    }

    let mut result = String::new();
    for word in normalized.split(' ') {
        let candidate = if result.is_empty() {
            word.chars().count()
        } else {
            result.chars().count() + 1 + word.chars().count()
        };
        if candidate > length {
            break;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }

    // A single word longer than the limit
    if result.is_empty() {
        result = normalized.chars().take(length).collect();
    }

    let trimmed = result.trim_end_matches(|c: char| c.is_ascii_punctuation());
    format!("{}…", trimmed)
}
