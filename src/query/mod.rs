//! Query layer over the in-memory content graph
//!
//! `ContentStore` holds every post of a build in one global date-descending
//! order and answers the queries the page templates need: site metadata, the
//! blog index, a single post with its neighbours, posts by tag, and the tag
//! summary. It also enumerates the routes the generator emits.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::config::SiteMetadata;
use crate::content::Post;
use crate::error::ContentError;
use crate::helpers::{tag_route, tag_slug, tags_index_route};

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub name: String,
    pub count: usize,
}

/// Data for a single post page
#[derive(Debug, Clone, Copy)]
pub struct PostPageData<'a> {
    pub post: &'a Post,
    /// The next older post
    pub previous: Option<&'a Post>,
    /// The next newer post
    pub next: Option<&'a Post>,
}

/// Data for a tag page
#[derive(Debug, Clone)]
pub struct TagPageData<'a> {
    pub tag: &'a str,
    pub posts: Vec<&'a Post>,
    pub total_count: usize,
}

/// One generated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Post(String),
    TagsIndex,
    Tag(String),
    NotFound,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Index => write!(f, "the blog index"),
            Route::Post(slug) => write!(f, "post {}", slug),
            Route::TagsIndex => write!(f, "the tags index"),
            Route::Tag(name) => write!(f, "tag page {:?}", name),
            Route::NotFound => write!(f, "the 404 page"),
        }
    }
}

impl Route {
    /// Site-relative path of the route (without root)
    pub fn path(&self, site: &SiteMetadata) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Post(slug) => slug.clone(),
            Route::TagsIndex => tags_index_route(site),
            Route::Tag(name) => tag_route(site, name),
            Route::NotFound => "/404.html".to_string(),
        }
    }

    /// Output file for the route, relative to the public directory
    pub fn output_file(&self, site: &SiteMetadata) -> String {
        match self {
            Route::NotFound => "404.html".to_string(),
            _ => {
                let path = self.path(site);
                let dir = path.trim_matches('/');
                if dir.is_empty() {
                    "index.html".to_string()
                } else {
                    format!("{}/index.html", dir)
                }
            }
        }
    }
}

/// The content graph of one build
#[derive(Debug)]
pub struct ContentStore {
    site: SiteMetadata,
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
    /// Tag name -> indices into `posts`, newest first
    by_tag: BTreeMap<String, Vec<usize>>,
}

impl ContentStore {
    /// Index `posts`, rejecting duplicate slugs and any two pages sharing an output file
    pub fn new(site: SiteMetadata, mut posts: Vec<Post>) -> Result<Self, ContentError> {
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let mut by_slug = HashMap::with_capacity(posts.len());
        for (i, post) in posts.iter().enumerate() {
            if let Some(&first) = by_slug.get(&post.slug) {
                let first: &Post = &posts[first];
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.full_source.clone(),
                    second: post.full_source.clone(),
                });
            }
            by_slug.insert(post.slug.clone(), i);
        }

        let mut by_tag: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, post) in posts.iter().enumerate() {
            for tag in post.sorted_tags() {
                by_tag.entry(tag.to_string()).or_default().push(i);
            }
        }

        let mut routes: HashMap<String, &str> = HashMap::new();
        for name in by_tag.keys() {
            if tag_slug(name).is_empty() {
                return Err(ContentError::EmptyTagSlug { tag: name.clone() });
            }
            let route = tag_route(&site, name);
            if let Some(first) = routes.get(&route) {
                return Err(ContentError::TagRouteCollision {
                    route,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            routes.insert(route, name.as_str());
        }

        let store = Self {
            site,
            posts,
            by_slug,
            by_tag,
        };
        store.check_output_files()?;
        Ok(store)
    }

    /// Posts may not land on the index, the tags index, a tag page or the 404 page
    fn check_output_files(&self) -> Result<(), ContentError> {
        let mut files: HashMap<String, Route> = HashMap::new();
        for route in self.routes() {
            let file = route.output_file(&self.site);
            if let Some(first) = files.get(&file) {
                return Err(ContentError::RouteCollision {
                    first: first.to_string(),
                    second: route.to_string(),
                    file,
                });
            }
            files.insert(file, route);
        }
        Ok(())
    }

    /// Site metadata shared by every page
    pub fn site_metadata(&self) -> &SiteMetadata {
        &self.site
    }

    /// All posts, newest first
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    /// One post with its chronological neighbours
    pub fn post_by_slug(&self, slug: &str) -> Option<PostPageData<'_>> {
        let &i = self.by_slug.get(slug)?;
        Some(PostPageData {
            post: &self.posts[i],
            previous: self.posts.get(i + 1),
            next: i.checked_sub(1).map(|j| &self.posts[j]),
        })
    }

    /// Posts carrying `tag` (exact, case-sensitive), newest first
    pub fn posts_by_tag(&self, tag: &str) -> Option<TagPageData<'_>> {
        let (name, indices) = self.by_tag.get_key_value(tag)?;
        let posts: Vec<&Post> = indices.iter().map(|&i| &self.posts[i]).collect();
        Some(TagPageData {
            tag: name,
            total_count: posts.len(),
            posts,
        })
    }

    /// Every distinct tag with its post count, sorted by name
    pub fn tags(&self) -> Vec<TagSummary> {
        self.by_tag
            .iter()
            .map(|(name, indices)| TagSummary {
                name: name.clone(),
                count: indices.len(),
            })
            .collect()
    }

    /// Every route of the site, in emission order
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = Vec::with_capacity(self.posts.len() + self.by_tag.len() + 3);
        routes.push(Route::Index);
        routes.extend(self.posts.iter().map(|p| Route::Post(p.slug.clone())));
        routes.push(Route::TagsIndex);
        routes.extend(self.by_tag.keys().map(|t| Route::Tag(t.clone())));
        routes.push(Route::NotFound);
        routes
    }
}
