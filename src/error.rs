//! Build-time content errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning content files into a site graph.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate slug {slug}: {first:?} and {second:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("tags {first:?} and {second:?} both map to route {route}")]
    TagRouteCollision {
        route: String,
        first: String,
        second: String,
    },

    #[error("tag {tag:?} has no characters usable in a route")]
    EmptyTagSlug { tag: String },

    #[error("{first} and {second} both write {file}")]
    RouteCollision {
        file: String,
        first: String,
        second: String,
    },

    #[error("invalid front-matter in {path:?}: {message}")]
    InvalidFrontMatter { path: PathBuf, message: String },
}
