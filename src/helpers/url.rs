//! URL helper functions

use crate::config::SiteMetadata;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&site, "/hello-world/") // -> "/blog/hello-world/"
/// ```
pub fn url_for(site: &SiteMetadata, path: &str) -> String {
    let root = site.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Whether `path` is the home route of the site
pub fn is_home(site: &SiteMetadata, path: &str) -> bool {
    let home = url_for(site, "/");
    path == home || path == home.trim_end_matches('/')
}

/// Slug-case a tag name for its route
///
/// # Examples
/// ```ignore
/// tag_slug("Cloud Functions") // -> "cloud-functions"
/// ```
pub fn tag_slug(tag: &str) -> String {
    slug::slugify(tag)
}

/// Site-relative route of a tag page (without root)
pub fn tag_route(site: &SiteMetadata, tag: &str) -> String {
    format!("/{}/{}/", site.tag_dir.trim_matches('/'), tag_slug(tag))
}

/// Site-relative route of the all-tags index (without root)
pub fn tags_index_route(site: &SiteMetadata) -> String {
    format!("/{}/", site.tag_dir.trim_matches('/'))
}

/// Link target of a tag page
pub fn tag_url(site: &SiteMetadata, tag: &str) -> String {
    url_for(site, &tag_route(site, tag))
}
