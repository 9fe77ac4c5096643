//! 404 page

use super::{document, layout};
use crate::config::SiteMetadata;
use crate::helpers::url_for;

/// Render the page served for unknown routes
pub fn not_found(site: &SiteMetadata) -> String {
    let body = "<h1>404: Not Found</h1>\n<p>You just hit a route that doesn&#39;t exist... the sadness.</p>";
    document(
        site,
        "404: Not Found",
        "",
        &layout(site, &url_for(site, "/404.html"), body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let site = SiteMetadata::default();
        let html = not_found(&site);
        assert!(html.contains("<h1>404: Not Found</h1>"));
        assert!(html.contains(r#"<h3 class="header-link-home"><a href="/">"#));
    }
}
