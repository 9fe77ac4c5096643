//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_summary: String,
    pub language: String,
    #[serde(default)]
    pub social: SocialConfig,

    // URL
    pub root: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Bio
    pub avatar: Option<String>,
    pub avatar_size: u32,
    pub bio_call_to_action: Option<String>,

    // Newsletter
    #[serde(default)]
    pub newsletter: NewsletterConfig,

    // Footer
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,

    // Writing
    pub excerpt_length: usize,
    pub words_per_minute: usize,
    pub date_format: String,
    pub render_drafts: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "Anonymous".to_string(),
            author_summary: String::new(),
            language: "en".to_string(),
            social: SocialConfig::default(),

            root: "/".to_string(),

            content_dir: "content/blog".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            avatar: None,
            avatar_size: 50,
            bio_call_to_action: None,

            newsletter: NewsletterConfig::default(),

            footer_links: Vec::new(),

            excerpt_length: 140,
            words_per_minute: 265,
            date_format: "MMMM DD, YYYY".to_string(),
            render_drafts: false,
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {:?}", path))?;
        Ok(config)
    }

    /// The display metadata threaded into every page
    pub fn metadata(&self) -> SiteMetadata {
        let footer_links = if self.footer_links.is_empty() {
            self.social.links()
        } else {
            self.footer_links.clone()
        };

        SiteMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            author_summary: self.author_summary.clone(),
            language: self.language.clone(),
            root: self.root.clone(),
            tag_dir: self.tag_dir.clone(),
            social: self.social.clone(),
            avatar: self.avatar.clone(),
            avatar_size: self.avatar_size,
            bio_call_to_action: self.bio_call_to_action.clone(),
            newsletter: self.newsletter.clone(),
            footer_links,
            date_format: self.date_format.clone(),
        }
    }
}

/// Social handles shown in the bio and footer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl SocialConfig {
    /// Footer links derived from the configured handles
    pub fn links(&self) -> Vec<FooterLink> {
        let mut links = Vec::new();
        if let Some(handle) = &self.twitter {
            links.push(FooterLink {
                name: "twitter".to_string(),
                url: format!("https://twitter.com/{}", handle),
            });
        }
        if let Some(handle) = &self.github {
            links.push(FooterLink {
                name: "github".to_string(),
                url: format!("https://github.com/{}", handle),
            });
        }
        links
    }
}

/// Newsletter sign-up block on post pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub enabled: bool,
    pub action: String,
    pub heading: String,
    pub body: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            action: String::new(),
            heading: "Enjoyed this post?".to_string(),
            body: "Get new articles delivered to your inbox.".to_string(),
        }
    }
}

/// A link rendered in the footer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub name: String,
    pub url: String,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Site-wide display context, read once per build
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_summary: String,
    pub language: String,
    pub root: String,
    pub tag_dir: String,
    pub social: SocialConfig,
    pub avatar: Option<String>,
    pub avatar_size: u32,
    pub bio_call_to_action: Option<String>,
    pub newsletter: NewsletterConfig,
    pub footer_links: Vec<FooterLink>,
    pub date_format: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        SiteConfig::default().metadata()
    }
}
