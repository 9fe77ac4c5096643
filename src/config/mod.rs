//! Configuration module

mod site;

pub use site::FooterLink;
pub use site::HighlightConfig;
pub use site::NewsletterConfig;
pub use site::SiteConfig;
pub use site::SiteMetadata;
pub use site::SocialConfig;
