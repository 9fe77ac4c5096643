//! Content module - front-matter, markdown, and post loading

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod summary;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::{MarkdownRenderer, MORE_MARKER};
pub use post::Post;
