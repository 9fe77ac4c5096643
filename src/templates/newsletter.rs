//! Newsletter sign-up block

use crate::config::SiteMetadata;
use crate::helpers::html_escape;

/// Render the sign-up form, or nothing when the newsletter is disabled
pub fn newsletter(site: &SiteMetadata) -> String {
    let config = &site.newsletter;
    if !config.enabled || config.action.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="newsletter">
<h3>{}</h3>
<p>{}</p>
<form action="{}" method="post">
<label for="newsletter-email">Email</label>
<input type="email" name="email" id="newsletter-email" required>
<button type="submit">Subscribe</button>
</form>
</section>"#,
        html_escape(&config.heading),
        html_escape(&config.body),
        html_escape(&config.action)
    )
}
